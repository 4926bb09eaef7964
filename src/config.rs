//! Harness configuration
//!
//! All tunables live in a single [`BenchConfig`] record so one harness
//! instance covers every workload variant. The nested [`StateShape`]
//! parameterizes the generated state (sizes and key prefixes); earlier
//! renditions of this workload duplicated the whole benchmark per shape.
//!
//! Configuration is compile-time: the binary runs `BenchConfig::default()`
//! and there are no flags.

use crate::error::{Error, Result};
use crate::heap::HeapSyncPolicy;

/// Fixed seed for reproducible state generation
pub const BENCH_SEED: u64 = 0xDEADBEEF_CAFEBABE;

/// Shape of the generated application state
#[derive(Debug, Clone)]
pub struct StateShape {
    /// Number of primary records (N)
    pub primary_len: usize,
    /// Number of secondary records (unused by update logic, inflates copy cost)
    pub secondary_len: usize,
    /// Length of each record's nested item sequence
    pub nested_items: usize,
    /// Prefix for the nested key of primary records ("key-{i}")
    pub nested_key_prefix: &'static str,
    /// Prefix for secondary record names ("name-{i}")
    pub secondary_name_prefix: &'static str,
}

impl Default for StateShape {
    fn default() -> Self {
        Self {
            primary_len: 10_000,
            secondary_len: 10_000,
            nested_items: 100,
            nested_key_prefix: "key-",
            secondary_name_prefix: "name-",
        }
    }
}

/// Full harness configuration
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Shape of the state each benchmark run starts from
    pub shape: StateShape,
    /// Iterations executed before measurement starts
    pub warmup_iterations: u64,
    /// Iterations inside the timed window
    pub measure_iterations: u64,
    /// Records per concat batch
    pub concat_batch: usize,
    /// Seed for the state generator's scalar values
    pub seed: u64,
    /// Heap-synchronization policy for the runner
    pub heap_sync: HeapSyncPolicy,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            shape: StateShape::default(),
            warmup_iterations: 100,
            measure_iterations: 1_000,
            concat_batch: 500,
            seed: BENCH_SEED,
            heap_sync: HeapSyncPolicy::Require,
        }
    }
}

impl BenchConfig {
    /// Validate the configuration before any benchmark runs
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for zero sizes or iteration counts
    /// that would make measurement meaningless (or divide by zero).
    pub fn validate(&self) -> Result<()> {
        if self.shape.primary_len == 0 {
            return Err(Error::InvalidConfig(
                "shape.primary_len must be non-zero".to_string(),
            ));
        }
        if self.measure_iterations == 0 {
            return Err(Error::InvalidConfig(
                "measure_iterations must be non-zero".to_string(),
            ));
        }
        if self.concat_batch == 0 {
            return Err(Error::InvalidConfig(
                "concat_batch must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
