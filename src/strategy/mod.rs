//! Interchangeable update strategies
//!
//! A strategy is a pure function from (snapshot, action) to the next
//! snapshot. All variants implement the same observable semantics; what
//! differs is the internal copying discipline:
//!
//! - [`FullCopy`] rebuilds the primary spine on every operation (baseline)
//! - [`DraftSharing`] mutates a draft and finalizes with structural sharing
//! - [`Rederive`] opens a draft but rebuilds wholesale from the pre-draft
//!   original, bypassing the draft's own sharing
//!
//! Out-of-range removes and unmatched update identifiers are no-ops in every
//! variant, so the equivalence property holds unconditionally.

mod draft_sharing;
mod full_copy;
mod rederive;

pub use draft_sharing::DraftSharing;
pub use full_copy::FullCopy;
pub use rederive::Rederive;

use crate::action::Action;
use crate::freeze::FreezeMode;
use crate::state::AppState;

/// Label of the variant every other variant is normalized against
pub const BASELINE_LABEL: &str = "full-copy";

/// One interchangeable update discipline
pub trait UpdateStrategy {
    /// Stable variant label used in output and normalization
    fn label(&self) -> &'static str;

    /// Produce the next snapshot; `state` is never mutated
    fn apply(&self, state: &AppState, action: Action) -> AppState;
}

/// The full variant matrix, in the order the suite runs it
pub fn all_variants() -> Vec<Box<dyn UpdateStrategy>> {
    vec![
        Box::new(FullCopy),
        Box::new(DraftSharing::new(FreezeMode::Deep)),
        Box::new(DraftSharing::new(FreezeMode::Off)),
        Box::new(Rederive::new(FreezeMode::Deep)),
        Box::new(Rederive::new(FreezeMode::Off)),
    ]
}
