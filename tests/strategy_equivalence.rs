//! Cross-variant equivalence
//!
//! For any fixed sequence of actions applied from the same initial state,
//! every variant must yield identical observable content. Divergence here is
//! a correctness defect in a strategy, caught at test time rather than by
//! runtime guards.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snapbench::state::make_initial_state;
use snapbench::strategy::all_variants;
use snapbench::{action, verify_seals, Action, AppState, StateShape, Store, UpdateStrategy};

fn fresh_state(len: usize) -> AppState {
    let shape = StateShape {
        primary_len: len,
        secondary_len: 4,
        nested_items: 3,
        ..StateShape::default()
    };
    // Same seed every call: each variant starts from an identical state.
    let mut rng = StdRng::seed_from_u64(0xABCD);
    make_initial_state(&shape, &mut rng)
}

fn run_sequence(len: usize, actions: &[Action]) -> Vec<AppState> {
    all_variants()
        .iter()
        .map(|variant| {
            let mut store = Store::new(fresh_state(len), variant.as_ref());
            for action in actions {
                store.dispatch(action.clone());
            }
            store.state().clone()
        })
        .collect()
}

#[test]
fn fixed_mixed_sequence_is_equivalent_across_variants() {
    let actions = vec![
        action::add(100),
        action::update(3),
        action::concat(2, 6),
        action::remove(4),
        action::add(101),
        action::remove(0),
        action::update(101),
        action::concat(9, 6),
    ];
    let results = run_sequence(16, &actions);
    let variants = all_variants();
    let baseline = &results[0];
    for (result, variant) in results.iter().zip(variants.iter()).skip(1) {
        assert_eq!(result, baseline, "variant {} diverged", variant.label());
    }
}

#[test]
fn frozen_variants_produce_intact_seals() {
    let actions = vec![action::add(7), action::update(2), action::concat(1, 4)];
    for variant in all_variants() {
        let mut store = Store::new(fresh_state(8), variant.as_ref());
        for action in &actions {
            store.dispatch(action.clone());
        }
        assert!(
            verify_seals(store.state()).is_empty(),
            "variant {} left a drifted seal",
            variant.label()
        );
    }
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u64..64).prop_map(action::add),
        (0u64..64).prop_map(action::remove),
        (0u64..64).prop_map(action::update),
        (0u64..64).prop_map(|i| action::concat(i, 7)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_sequences_are_equivalent_across_variants(
        actions in prop::collection::vec(arb_action(), 0..20)
    ) {
        let results = run_sequence(20, &actions);
        let baseline = &results[0];
        for result in &results[1..] {
            prop_assert_eq!(result, baseline);
        }
    }

    #[test]
    fn sequence_length_is_tracked_consistently(
        actions in prop::collection::vec(arb_action(), 1..12)
    ) {
        // Length bookkeeping alone: adds grow, removes shrink when in
        // range, updates and concats preserve.
        let mut expected = 20usize;
        for action in &actions {
            match action {
                Action::Add { .. } => expected += 1,
                Action::Remove { index } => {
                    if *index < expected {
                        expected -= 1;
                    }
                }
                Action::Update { .. } | Action::Concat { .. } => {}
            }
        }
        let results = run_sequence(20, &actions);
        for result in &results {
            prop_assert_eq!(result.len(), expected);
        }
    }
}
