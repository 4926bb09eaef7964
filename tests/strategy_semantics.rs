//! Per-operation semantics across every strategy variant
//!
//! Every variant must implement the same observable semantics; these tests
//! pin the contract for each operation kind and walk the end-to-end
//! scenario through a store.

use rand::rngs::StdRng;
use rand::SeedableRng;
use snapbench::state::{make_initial_state, Record};
use snapbench::strategy::all_variants;
use snapbench::{action, Action, AppState, StateShape, Store, UpdateStrategy};

fn state_of(len: usize) -> AppState {
    let shape = StateShape {
        primary_len: len,
        secondary_len: 4,
        nested_items: 3,
        ..StateShape::default()
    };
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    make_initial_state(&shape, &mut rng)
}

#[test]
fn add_appends_and_grows_by_one() {
    let state = state_of(10);
    for variant in all_variants() {
        let next = variant.apply(&state, action::add(42));
        assert_eq!(next.len(), 11, "variant {}", variant.label());
        assert_eq!(next.records[10].id, 42);
        assert_eq!(next.records[10].value, 42.0);
    }
}

#[test]
fn remove_deletes_by_position() {
    let state = state_of(3);
    for variant in all_variants() {
        let next = variant.apply(&state, action::remove(0));
        assert_eq!(next.ids(), vec![1, 2], "variant {}", variant.label());
    }
}

#[test]
fn remove_out_of_range_is_a_noop_everywhere() {
    let state = state_of(3);
    for variant in all_variants() {
        let next = variant.apply(&state, action::remove(3));
        assert_eq!(next, state, "variant {}", variant.label());
    }
}

#[test]
fn update_replaces_only_the_matched_record() {
    let state = state_of(10);
    for variant in all_variants() {
        let next = variant.apply(&state, action::update(7));
        assert_eq!(next.len(), 10, "variant {}", variant.label());
        assert_eq!(next.records[7].value, 7.0);
        assert_eq!(next.records[7].nested.data, 7.0);
        assert_eq!(next.records[7].nested.key, state.records[7].nested.key);
        for i in (0..10).filter(|&i| i != 7) {
            assert_eq!(next.records[i], state.records[i]);
        }
    }
}

#[test]
fn update_missing_identifier_leaves_state_unchanged() {
    let state = state_of(5);
    for variant in all_variants() {
        let next = variant.apply(&state, action::update(99));
        assert_eq!(next, state, "variant {}", variant.label());
    }
}

#[test]
fn concat_is_a_fixed_size_sliding_window() {
    let n = 12;
    let batch = 5;
    let state = state_of(n);
    for variant in all_variants() {
        let next = variant.apply(&state, action::concat(3, batch));
        assert_eq!(next.len(), n, "variant {}", variant.label());
        // Newest batch at the front, in payload order.
        for i in 0..batch {
            assert_eq!(next.records[i].id, i as u64);
            assert_eq!(next.records[i].value, 3.0);
        }
        // Remainder is the previous state's front, oldest tail dropped.
        for i in 0..(n - batch) {
            assert_eq!(next.records[batch + i], state.records[i]);
        }
    }
}

#[test]
fn end_to_end_scenario() {
    for variant in all_variants() {
        let mut store = Store::new(state_of(5), variant.as_ref());
        assert_eq!(store.state().ids(), vec![0, 1, 2, 3, 4]);

        store.dispatch(action::remove(2));
        assert_eq!(store.state().ids(), vec![0, 1, 3, 4]);

        store.dispatch(Action::Add {
            record: Record::minimal(9, 9.0, 9.0),
        });
        assert_eq!(store.state().ids(), vec![0, 1, 3, 4, 9]);

        store.dispatch(Action::Update {
            id: 9,
            value: 42.0,
            nested_data: 9.0,
        });
        assert_eq!(store.state().ids(), vec![0, 1, 3, 4, 9]);
        assert_eq!(store.state().records[4].value, 42.0);
    }
}
