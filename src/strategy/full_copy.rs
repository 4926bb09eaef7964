//! Baseline discipline: rebuild the primary spine on every operation
//!
//! Each operation collects a brand-new persistent vector from an iterator
//! over the previous one, so the whole spine is reallocated even when a
//! single element changed. Untouched elements keep their `Arc` identity
//! (shallow copy on touch); for update, only the matched record and its
//! nested object get new identity.

use crate::action::Action;
use crate::state::{AppState, Nested, Record};
use crate::strategy::UpdateStrategy;
use im::Vector;
use std::sync::Arc;

/// Full-copy update strategy (the normalization baseline)
pub struct FullCopy;

impl UpdateStrategy for FullCopy {
    fn label(&self) -> &'static str {
        super::BASELINE_LABEL
    }

    fn apply(&self, state: &AppState, action: Action) -> AppState {
        AppState {
            records: rebuild_spine(state, action),
            secondary: state.secondary.clone(),
        }
    }
}

/// Collect a fresh primary spine implementing `action` over `state`
///
/// Shared with the rederive discipline, which runs the same rebuild against
/// the pre-draft original instead of the live draft.
pub(crate) fn rebuild_spine(state: &AppState, action: Action) -> Vector<Arc<Record>> {
    let records = &state.records;
    match action {
        Action::Add { record } => records
            .iter()
            .cloned()
            .chain(std::iter::once(Arc::new(record)))
            .collect(),
        Action::Remove { index } => records
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, r)| r.clone())
            .collect(),
        Action::Update {
            id,
            value,
            nested_data,
        } => {
            let target = records.iter().position(|r| r.id == id);
            records
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    if Some(i) == target {
                        Arc::new(Record::new(
                            r.id,
                            value,
                            Nested {
                                key: r.nested.key.clone(),
                                data: nested_data,
                            },
                            Arc::clone(&r.more_nested),
                        ))
                    } else {
                        r.clone()
                    }
                })
                .collect()
        }
        Action::Concat { batch } => {
            let window = records.len();
            batch
                .into_iter()
                .map(Arc::new)
                .chain(records.iter().cloned())
                .take(window)
                .collect()
        }
    }
}
