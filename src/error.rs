//! Error types for the benchmark harness
//!
//! This module defines all error types used throughout the harness.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All fatal errors surface before any benchmark runs; out-of-range actions
//! are handled locally inside the strategies (as no-ops) and never reach
//! this taxonomy.

use crate::action::ActionKind;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the benchmark harness
#[derive(Debug, Error)]
pub enum Error {
    /// The explicit heap-synchronization primitive is missing on this host
    /// and the configured policy requires one
    #[error("heap synchronization primitive unavailable on this host (policy: require)")]
    HeapSyncUnavailable,

    /// Configuration rejected before any benchmark runs
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The aggregator was asked to normalize a kind with no baseline sample
    #[error("no baseline sample recorded for action kind {0}")]
    MissingBaseline(ActionKind),
}
