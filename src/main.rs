//! snapbench CLI - runs the full benchmark matrix and prints results
//!
//! No arguments. Exit code 0 on completion; non-zero when the configured
//! heap-synchronization policy cannot be satisfied on this host (reported
//! before any benchmark runs). `RUST_LOG` controls tracing verbosity.

use anyhow::Context;
use snapbench::{heap, strategy, ActionKind, BenchConfig, BenchmarkRunner, ResultsTable};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = BenchConfig::default();
    config.validate().context("configuration rejected")?;
    let heap = heap::for_policy(config.heap_sync)
        .context("cannot establish a heap synchronization point")?;
    tracing::info!(
        heap = heap.label(),
        state_size = config.shape.primary_len,
        measure_iterations = config.measure_iterations,
        "starting benchmarks"
    );

    let runner = BenchmarkRunner::new(&config, heap);
    let variants = strategy::all_variants();
    let mut table = ResultsTable::new(strategy::BASELINE_LABEL);

    println!("Starting benchmarks...");
    for kind in ActionKind::ALL {
        for variant in &variants {
            runner.run(variant.as_ref(), kind, &mut table);
        }
    }

    println!();
    println!("{}", table.render_dump());
    println!("Relative slow-down (baseline = {}):", strategy::BASELINE_LABEL);
    println!();
    print!("{}", table.render_slowdown_markdown()?);
    Ok(())
}
