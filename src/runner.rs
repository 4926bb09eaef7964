//! Benchmark runner: warm-up, synchronize, measure
//!
//! One `run` call measures one (strategy, action kind) pair. The state is
//! rebuilt fresh for every run so a previous run's truncation or growth
//! never contaminates the next; the heap-synchronization capability brackets
//! the timed window so measurement starts from a comparable allocator state
//! and does not pollute the following run's warm-up.
//!
//! The measured loop is synchronous and contains no suspension points;
//! anything asynchronous here would invalidate the elapsed-time reading.

use crate::action::{self, ActionKind};
use crate::config::BenchConfig;
use crate::heap::HeapSync;
use crate::report::{ResultsTable, TimingSample};
use crate::state::make_initial_state;
use crate::store::Store;
use crate::strategy::UpdateStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;

/// Drives warm-up and measurement for (strategy, action kind) pairs
pub struct BenchmarkRunner<'a> {
    config: &'a BenchConfig,
    heap: Box<dyn HeapSync>,
}

impl<'a> BenchmarkRunner<'a> {
    /// Create a runner over `config` with a resolved heap capability
    pub fn new(config: &'a BenchConfig, heap: Box<dyn HeapSync>) -> Self {
        Self { config, heap }
    }

    /// Benchmark one (strategy, action kind) pair
    ///
    /// Appends the sample to `table`, prints the per-run line, and returns
    /// the sample.
    pub fn run(
        &self,
        strategy: &dyn UpdateStrategy,
        kind: ActionKind,
        table: &mut ResultsTable,
    ) -> TimingSample {
        let variant = strategy.label();
        tracing::debug!(%kind, variant, "building fresh state");
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let state = make_initial_state(&self.config.shape, &mut rng);
        let mut store = Store::new(state, strategy);

        tracing::debug!(
            %kind,
            variant,
            iterations = self.config.warmup_iterations,
            "warming up"
        );
        for i in 0..self.config.warmup_iterations {
            store.dispatch(action::generate(kind, i, self.config));
        }

        self.heap.synchronize();

        let measure_from = self.config.warmup_iterations;
        let measure_to = measure_from + self.config.measure_iterations;
        let start = Instant::now();
        for i in measure_from..measure_to {
            store.dispatch(action::generate(kind, i, self.config));
        }
        let elapsed = start.elapsed();
        black_box(store.state());

        self.heap.synchronize();

        let per_op_ms = elapsed.as_secs_f64() * 1_000.0 / self.config.measure_iterations as f64;
        let sample = TimingSample {
            kind,
            variant,
            per_op_ms,
        };
        table.record(&sample);
        println!("{sample}");
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StateShape;
    use crate::heap::NoopHeapSync;
    use crate::strategy;

    fn tiny_config() -> BenchConfig {
        BenchConfig {
            shape: StateShape {
                primary_len: 64,
                secondary_len: 8,
                nested_items: 4,
                ..StateShape::default()
            },
            warmup_iterations: 3,
            measure_iterations: 5,
            concat_batch: 8,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_run_records_one_sample() {
        let config = tiny_config();
        let runner = BenchmarkRunner::new(&config, Box::new(NoopHeapSync));
        let mut table = ResultsTable::default();
        let sample = runner.run(&strategy::FullCopy, ActionKind::Add, &mut table);
        assert_eq!(sample.variant, "full-copy");
        assert!(sample.per_op_ms >= 0.0);
        assert!(table.duration(ActionKind::Add, "full-copy").is_some());
    }

    #[test]
    fn test_full_matrix_normalizes_with_unit_baseline() {
        let config = tiny_config();
        let runner = BenchmarkRunner::new(&config, Box::new(NoopHeapSync));
        let variants = strategy::all_variants();
        let mut table = ResultsTable::default();
        for kind in ActionKind::ALL {
            for variant in &variants {
                runner.run(variant.as_ref(), kind, &mut table);
            }
        }
        let normalized = table.normalized().unwrap();
        assert_eq!(normalized.len(), ActionKind::ALL.len());
        for factors in normalized.values() {
            assert_eq!(factors.len(), variants.len());
            let base = factors
                .iter()
                .find(|(v, _)| *v == strategy::BASELINE_LABEL)
                .unwrap()
                .1;
            assert_eq!(base, 1.0);
        }
    }
}
