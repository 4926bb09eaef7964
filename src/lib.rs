//! snapbench - micro-benchmark harness for immutable snapshot updates
//!
//! Quantifies the cost of producing a new immutable application-state
//! snapshot after an update, across interchangeable update strategies:
//! - full copy (baseline): a brand-new primary spine every operation
//! - draft with structural sharing: copy-on-write through a two-phase
//!   draft protocol, optionally deep-freezing the result
//! - rederive: draft machinery paid for, sharing traversal bypassed
//!
//! All strategies implement the same observable semantics over one fixed
//! workload (append, remove-by-position, update-by-id, bulk prepend with a
//! sliding window); the harness isolates steady-state cost from warm-up and
//! allocator noise, and reports relative slow-down factors against the
//! full-copy baseline.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod config;
pub mod draft;
pub mod error;
pub mod freeze;
pub mod heap;
pub mod report;
pub mod runner;
pub mod state;
pub mod store;
pub mod strategy;

pub use action::{Action, ActionKind};
pub use config::{BenchConfig, StateShape, BENCH_SEED};
pub use draft::Draft;
pub use error::{Error, Result};
pub use freeze::{deep_freeze, verify_seals, FreezeMode};
pub use heap::{HeapSync, HeapSyncPolicy};
pub use report::{ResultsTable, TimingSample};
pub use runner::BenchmarkRunner;
pub use state::{make_initial_state, AppState, Record, SecondaryRecord};
pub use store::Store;
pub use strategy::{UpdateStrategy, BASELINE_LABEL};
