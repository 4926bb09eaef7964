//! Workload state model and deterministic generator
//!
//! The benchmarked state is one immutable snapshot: a primary sequence of
//! [`Record`]s (the sequence every update targets) and a secondary sequence
//! that no update touches, present only to give the snapshot realistic bulk.
//!
//! Sequences are persistent vectors ([`im::Vector`]) and elements are `Arc`s,
//! so snapshots can share untouched substructure by reference and tests can
//! observe both reference identity and by-value equality.
//!
//! ## Equality
//!
//! Record equality compares observable content only. The `seal` slot filled
//! by the deep-freeze pass is bookkeeping and is ignored, so a frozen and an
//! unfrozen snapshot with the same content compare equal.

use crate::config::StateShape;
use im::Vector;
use once_cell::sync::OnceCell;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;

/// Nested scalar holder inside a primary record
#[derive(Debug, Clone, PartialEq)]
pub struct Nested {
    /// Index-derived key ("key-{i}")
    pub key: String,
    /// Nested scalar targeted by update actions
    pub data: f64,
}

/// One element of a record's wide nested sequence
#[derive(Debug, Clone, PartialEq)]
pub struct NestedItem {
    /// Position within the sequence
    pub id: u64,
    /// Stringified position
    pub name: String,
}

/// Wide nested collection (~100 small items per record)
///
/// Shared by reference between snapshots: no update strategy copies it, the
/// original workload passes it along untouched on every operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoreNested {
    /// The item sequence
    pub items: Vec<NestedItem>,
}

/// One element of the primary sequence
#[derive(Debug, Clone)]
pub struct Record {
    /// Identifier (index at generation time)
    pub id: u64,
    /// Scalar value targeted by update actions
    pub value: f64,
    /// Nested object with a further-nested scalar
    pub nested: Nested,
    /// Wide nested collection, reference-shared across snapshots
    pub more_nested: Arc<MoreNested>,
    /// Content digest filled by the deep-freeze pass; never observable
    pub(crate) seal: OnceCell<u64>,
}

impl Record {
    /// Create a record with a fresh (unsealed) seal slot
    pub fn new(id: u64, value: f64, nested: Nested, more_nested: Arc<MoreNested>) -> Self {
        Self {
            id,
            value,
            nested,
            more_nested,
            seal: OnceCell::new(),
        }
    }

    /// Create the minimal record shape used by action payloads
    ///
    /// Payload records carry no nested key and an empty wide collection,
    /// mirroring the minimal objects the workload dispatches.
    pub fn minimal(id: u64, value: f64, nested_data: f64) -> Self {
        Self::new(
            id,
            value,
            Nested {
                key: String::new(),
                data: nested_data,
            },
            Arc::new(MoreNested::default()),
        )
    }

    /// Digest recorded by the last deep-freeze pass, if any
    pub fn seal(&self) -> Option<u64> {
        self.seal.get().copied()
    }
}

// Observable content only; the seal slot is bookkeeping.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.value == other.value
            && self.nested == other.nested
            && self.more_nested == other.more_nested
    }
}

/// One element of the secondary sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryRecord {
    /// Identifier (index at generation time)
    pub id: u64,
    /// Index-derived name ("name-{i}")
    pub name: String,
    /// Alternates by index
    pub is_active: bool,
}

/// An immutable application-state snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Primary sequence, targeted by every update strategy
    pub records: Vector<Arc<Record>>,
    /// Secondary sequence, never touched by updates
    pub secondary: Vector<Arc<SecondaryRecord>>,
}

impl AppState {
    /// Number of primary records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the primary sequence is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ordered identifiers of the primary sequence
    pub fn ids(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.id).collect()
    }
}

/// Build the initial state for one benchmark run
///
/// Deterministic in shape for a given [`StateShape`]; scalar values are
/// drawn from the passed rng, so a pinned seed reproduces them exactly.
pub fn make_initial_state(shape: &StateShape, rng: &mut StdRng) -> AppState {
    let records = (0..shape.primary_len as u64)
        .map(|i| {
            let items = (0..shape.nested_items as u64)
                .map(|j| NestedItem {
                    id: j,
                    name: j.to_string(),
                })
                .collect();
            Arc::new(Record::new(
                i,
                rng.gen::<f64>(),
                Nested {
                    key: format!("{}{}", shape.nested_key_prefix, i),
                    data: rng.gen::<f64>(),
                },
                Arc::new(MoreNested { items }),
            ))
        })
        .collect();

    let secondary = (0..shape.secondary_len as u64)
        .map(|i| {
            Arc::new(SecondaryRecord {
                id: i,
                name: format!("{}{}", shape.secondary_name_prefix, i),
                is_active: i % 2 == 0,
            })
        })
        .collect();

    AppState { records, secondary }
}
