//! Deep-freeze pass over finalized snapshots
//!
//! Freezing is a correctness safety net, not part of update semantics: it
//! seals each primary record with a digest of its observable content so a
//! later, accidental mutation can be detected by [`verify_seals`]. It is
//! configurable per strategy variant and toggled off for the no-freeze
//! performance comparison.
//!
//! The pass is incremental: a record sealed by an earlier finalize keeps its
//! seal (the `Arc` is shared between snapshots), so steady-state cost is
//! proportional to the records created by the current operation, not to the
//! whole state. The first freeze over a fresh state walks everything.

use crate::state::{AppState, Record};
use xxhash_rust::xxh3::Xxh3;

/// Whether a strategy deep-freezes the snapshot it finalizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeMode {
    /// Seal every unsealed primary record after finalize
    Deep,
    /// Skip sealing entirely
    Off,
}

/// XXH3 digest of a record's observable content
pub fn content_digest(record: &Record) -> u64 {
    let mut hasher = Xxh3::new();
    hasher.update(&record.id.to_le_bytes());
    hasher.update(&record.value.to_bits().to_le_bytes());
    hasher.update(record.nested.key.as_bytes());
    hasher.update(&record.nested.data.to_bits().to_le_bytes());
    for item in &record.more_nested.items {
        hasher.update(&item.id.to_le_bytes());
        hasher.update(item.name.as_bytes());
    }
    hasher.digest()
}

/// Seal every primary record that is not already sealed
pub fn deep_freeze(state: &AppState) {
    for record in state.records.iter() {
        if record.seal.get().is_none() {
            // Lost race is impossible single-threaded; set cannot fail here.
            let _ = record.seal.set(content_digest(record));
        }
    }
}

/// Identifiers of sealed records whose content no longer matches their seal
///
/// An empty result means the snapshot is intact. Unsealed records are not
/// checked; only a record mutated after sealing is reported.
pub fn verify_seals(state: &AppState) -> Vec<u64> {
    state
        .records
        .iter()
        .filter(|r| matches!(r.seal.get(), Some(&seal) if seal != content_digest(r)))
        .map(|r| r.id)
        .collect()
}
