//! Results accumulation and reporting
//!
//! The table is an explicitly passed handle scoped to one suite execution:
//! created before the first benchmark, appended to by the runner, printed
//! once after the last benchmark, never persisted. Rows are action kinds in
//! fixed enum order; columns are variants in first-recorded order.

use crate::action::ActionKind;
use crate::error::{Error, Result};
use crate::strategy::BASELINE_LABEL;
use std::collections::BTreeMap;
use std::fmt;

/// One measured (kind, variant) duration
#[derive(Debug, Clone)]
pub struct TimingSample {
    /// Action kind the run exercised
    pub kind: ActionKind,
    /// Strategy variant label
    pub variant: &'static str,
    /// Steady-state duration per operation, in milliseconds
    pub per_op_ms: f64,
}

impl fmt::Display for TimingSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {:.4} ms", self.kind, self.variant, self.per_op_ms)
    }
}

/// Accumulator for the suite's timing samples
pub struct ResultsTable {
    baseline: &'static str,
    variants: Vec<&'static str>,
    durations: BTreeMap<ActionKind, BTreeMap<&'static str, f64>>,
}

impl ResultsTable {
    /// Create a table normalizing against `baseline`
    pub fn new(baseline: &'static str) -> Self {
        Self {
            baseline,
            variants: Vec::new(),
            durations: BTreeMap::new(),
        }
    }

    /// Append one sample; a repeated (kind, variant) pair keeps the latest
    pub fn record(&mut self, sample: &TimingSample) {
        if !self.variants.contains(&sample.variant) {
            self.variants.push(sample.variant);
        }
        self.durations
            .entry(sample.kind)
            .or_default()
            .insert(sample.variant, sample.per_op_ms);
    }

    /// Recorded duration for a (kind, variant) pair
    pub fn duration(&self, kind: ActionKind, variant: &str) -> Option<f64> {
        self.durations.get(&kind)?.get(variant).copied()
    }

    /// Variant labels in column order
    pub fn variants(&self) -> &[&'static str] {
        &self.variants
    }

    /// Whether any sample has been recorded
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Per-kind slow-down factors against the baseline, rounded to one
    /// decimal, in column order
    ///
    /// # Errors
    /// [`Error::MissingBaseline`] when a kind has samples but none for the
    /// baseline variant.
    pub fn normalized(&self) -> Result<BTreeMap<ActionKind, Vec<(&'static str, f64)>>> {
        let mut out = BTreeMap::new();
        for (&kind, row) in &self.durations {
            let base = *row
                .get(self.baseline)
                .ok_or(Error::MissingBaseline(kind))?;
            let factors = self
                .variants
                .iter()
                .filter_map(|&v| row.get(v).map(|&d| (v, round1(d / base))))
                .collect();
            out.insert(kind, factors);
        }
        Ok(out)
    }

    /// Aligned tabular dump of per-operation milliseconds
    pub fn render_dump(&self) -> String {
        let label_width = self
            .variants
            .iter()
            .map(|v| v.len())
            .max()
            .unwrap_or(0)
            .max("variant".len());
        let mut out = String::new();
        out.push_str(&format!("{:label_width$}", "variant"));
        for kind in ActionKind::ALL {
            out.push_str(&format!("  {:>12}", kind.to_string()));
        }
        out.push('\n');
        for &variant in &self.variants {
            out.push_str(&format!("{variant:label_width$}"));
            for kind in ActionKind::ALL {
                match self.duration(kind, variant) {
                    Some(ms) => out.push_str(&format!("  {ms:>12.4}")),
                    None => out.push_str(&format!("  {:>12}", "-")),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Markdown table of slow-down factors, one row per action kind
    ///
    /// The baseline column is always exactly `1.0`.
    pub fn render_slowdown_markdown(&self) -> Result<String> {
        let normalized = self.normalized()?;
        let mut out = String::new();
        out.push_str("| action |");
        for v in &self.variants {
            out.push_str(&format!(" {v} |"));
        }
        out.push_str("\n|---|");
        for _ in &self.variants {
            out.push_str("---|");
        }
        out.push('\n');
        for (kind, factors) in &normalized {
            out.push_str(&format!("| {kind} |"));
            let by_variant: BTreeMap<_, _> = factors.iter().copied().collect();
            for v in &self.variants {
                match by_variant.get(v) {
                    Some(f) => out.push_str(&format!(" {f:.1} |")),
                    None => out.push_str(" - |"),
                }
            }
            out.push('\n');
        }
        Ok(out)
    }
}

impl Default for ResultsTable {
    fn default() -> Self {
        Self::new(BASELINE_LABEL)
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
