//! Copy-on-write discipline via the two-phase draft protocol
//!
//! Mutations are expressed imperatively against a draft and the next
//! snapshot is derived on finalize, copying only the touched paths. The
//! deep-freeze seal pass is the configurable correctness safety net; the
//! no-freeze variant skips it to expose its cost in the comparison.

use crate::action::Action;
use crate::draft::Draft;
use crate::freeze::FreezeMode;
use crate::state::AppState;
use crate::strategy::UpdateStrategy;

/// Draft-based strategy with structural sharing
pub struct DraftSharing {
    freeze: FreezeMode,
}

impl DraftSharing {
    /// Create the variant for the given freeze mode
    pub fn new(freeze: FreezeMode) -> Self {
        Self { freeze }
    }
}

impl UpdateStrategy for DraftSharing {
    fn label(&self) -> &'static str {
        match self.freeze {
            FreezeMode::Deep => "draft",
            FreezeMode::Off => "draft-nofreeze",
        }
    }

    fn apply(&self, state: &AppState, action: Action) -> AppState {
        let mut draft = Draft::begin(state);
        match action {
            Action::Add { record } => draft.push_record(record),
            Action::Remove { index } => draft.remove_at(index),
            Action::Update {
                id,
                value,
                nested_data,
            } => draft.update_record(id, value, nested_data),
            Action::Concat { batch } => draft.prepend_window(batch),
        }
        draft.finalize(self.freeze)
    }
}
