//! Rederive discipline: rebuild from the pre-draft original
//!
//! Opens a draft like the sharing strategy, but instead of mutating the
//! draft's own copy it asks for the pre-draft original mid-mutation and
//! collects a brand-new spine from it, then swaps that spine into the draft
//! before finalizing. Measures the cost of paying for the draft machinery
//! while bypassing its structural-sharing traversal.

use crate::action::Action;
use crate::draft::Draft;
use crate::freeze::FreezeMode;
use crate::state::AppState;
use crate::strategy::full_copy::rebuild_spine;
use crate::strategy::UpdateStrategy;

/// Draft-wrapped strategy that rebuilds wholesale from the original
pub struct Rederive {
    freeze: FreezeMode,
}

impl Rederive {
    /// Create the variant for the given freeze mode
    pub fn new(freeze: FreezeMode) -> Self {
        Self { freeze }
    }
}

impl UpdateStrategy for Rederive {
    fn label(&self) -> &'static str {
        match self.freeze {
            FreezeMode::Deep => "rederive",
            FreezeMode::Off => "rederive-nofreeze",
        }
    }

    fn apply(&self, state: &AppState, action: Action) -> AppState {
        let mut draft = Draft::begin(state);
        let records = rebuild_spine(draft.original(), action);
        draft.replace_records(records);
        draft.finalize(self.freeze)
    }
}
