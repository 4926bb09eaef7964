//! Two-phase draft protocol over immutable snapshots
//!
//! `begin` opens a mutable view over a snapshot, mutation methods express
//! updates imperatively (push / remove / field assignment), and `finalize`
//! derives the next immutable snapshot. Only the paths actually touched are
//! copied: the working sequence is a persistent vector, so structure is
//! shared with the previous snapshot until a path is written, and touched
//! records are copied on write through `Arc::make_mut`.
//!
//! The pre-draft snapshot stays reachable through [`Draft::original`] for
//! callers that want to rebuild wholesale instead of mutating in place.

use crate::freeze::{self, FreezeMode};
use crate::state::{AppState, Record, SecondaryRecord};
use im::Vector;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// A temporary mutable view over an immutable snapshot
#[derive(Debug)]
pub struct Draft {
    original: AppState,
    records: Vector<Arc<Record>>,
    secondary: Vector<Arc<SecondaryRecord>>,
}

impl Draft {
    /// Open a draft over `state`
    ///
    /// Cheap: both sequences are shared with the snapshot until written.
    pub fn begin(state: &AppState) -> Self {
        Self {
            original: state.clone(),
            records: state.records.clone(),
            secondary: state.secondary.clone(),
        }
    }

    /// The snapshot this draft was opened over, unaffected by mutations
    pub fn original(&self) -> &AppState {
        &self.original
    }

    /// Current length of the draft's primary sequence
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the draft's primary sequence is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the primary sequence
    pub fn push_record(&mut self, record: Record) {
        self.records.push_back(Arc::new(record));
    }

    /// Delete the record at `index`; out of range is a no-op
    pub fn remove_at(&mut self, index: usize) {
        if index < self.records.len() {
            self.records.remove(index);
        }
    }

    /// Replace the scalar and nested scalar of the first record whose
    /// identifier equals `id`; no match leaves the draft unchanged
    pub fn update_record(&mut self, id: u64, value: f64, nested_data: f64) {
        let pos = self.records.iter().position(|r| r.id == id);
        if let Some(slot) = pos.and_then(|p| self.records.get_mut(p)) {
            let record = Arc::make_mut(slot);
            record.value = value;
            record.nested.data = nested_data;
            // A mutated record sheds the seal of the content it replaced.
            record.seal = OnceCell::new();
        }
    }

    /// Prepend `batch`, then truncate back to the pre-operation length
    pub fn prepend_window(&mut self, batch: Vec<Record>) {
        let window = self.records.len();
        let mut fresh: Vector<Arc<Record>> = batch.into_iter().map(Arc::new).collect();
        fresh.append(std::mem::take(&mut self.records));
        fresh.truncate(window);
        self.records = fresh;
    }

    /// Swap in a wholesale replacement for the primary sequence
    ///
    /// Used by the rederive discipline, which builds the next sequence from
    /// [`Draft::original`] instead of mutating the draft's own copy.
    pub fn replace_records(&mut self, records: Vector<Arc<Record>>) {
        self.records = records;
    }

    /// Derive the next immutable snapshot from this draft
    pub fn finalize(self, mode: FreezeMode) -> AppState {
        let state = AppState {
            records: self.records,
            secondary: self.secondary,
        };
        if mode == FreezeMode::Deep {
            freeze::deep_freeze(&state);
        }
        state
    }
}
