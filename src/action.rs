//! Update action descriptors and their deterministic generators
//!
//! One generator per kind, fully deterministic given the iteration index, so
//! two strategies run over the same index receive identical payloads. No
//! randomness here: determinism is what makes cross-variant timings
//! comparable.

use crate::config::BenchConfig;
use crate::state::Record;
use std::fmt;

/// The four canonical operation kinds, in fixed matrix order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    /// Append one record to the end of the primary sequence
    Add,
    /// Delete the record at a position
    Remove,
    /// Replace one record's scalar and nested scalar, matched by identifier
    Update,
    /// Prepend a batch, then truncate back to the pre-operation length
    Concat,
}

impl ActionKind {
    /// All kinds in the order the suite runs them
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Add,
        ActionKind::Remove,
        ActionKind::Update,
        ActionKind::Concat,
    ];
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Add => "add",
            ActionKind::Remove => "remove",
            ActionKind::Update => "update",
            ActionKind::Concat => "concat",
        };
        write!(f, "{}", name)
    }
}

/// A tagged update descriptor with kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append the payload record
    Add {
        /// The record to append
        record: Record,
    },
    /// Delete by position (not identifier)
    Remove {
        /// Position within the primary sequence
        index: usize,
    },
    /// Replace scalar fields of the first record with a matching identifier
    Update {
        /// Identifier to match
        id: u64,
        /// New scalar value
        value: f64,
        /// New nested scalar value
        nested_data: f64,
    },
    /// Prepend the batch, keep the pre-operation length
    Concat {
        /// Records to slide in at the front
        batch: Vec<Record>,
    },
}

impl Action {
    /// Kind of this action
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Add { .. } => ActionKind::Add,
            Action::Remove { .. } => ActionKind::Remove,
            Action::Update { .. } => ActionKind::Update,
            Action::Concat { .. } => ActionKind::Concat,
        }
    }
}

/// Add action for iteration `index`
pub fn add(index: u64) -> Action {
    Action::Add {
        record: Record::minimal(index, index as f64, index as f64),
    }
}

/// Remove action for iteration `index`
pub fn remove(index: u64) -> Action {
    Action::Remove {
        index: index as usize,
    }
}

/// Update action for iteration `index`
pub fn update(index: u64) -> Action {
    Action::Update {
        id: index,
        value: index as f64,
        nested_data: index as f64,
    }
}

/// Concat action: always exactly `batch` minimal records, ids `0..batch`,
/// value derived from `index`
pub fn concat(index: u64, batch: usize) -> Action {
    Action::Concat {
        batch: (0..batch as u64)
            .map(|i| Record::minimal(i, index as f64, index as f64))
            .collect(),
    }
}

/// Generate the action of `kind` for iteration `index`
pub fn generate(kind: ActionKind, index: u64, config: &BenchConfig) -> Action {
    match kind {
        ActionKind::Add => add(index),
        ActionKind::Remove => remove(index),
        ActionKind::Update => update(index),
        ActionKind::Concat => concat(index, config.concat_batch),
    }
}
