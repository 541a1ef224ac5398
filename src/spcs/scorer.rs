//! SP-CS scoring.

use super::config::SpCsConfig;
use crate::error::ScoreError;
use crate::table::{AlternativeTable, Ranking};

/// Subset columns with a span below this are treated as constant.
const EPS: f64 = 1e-9;

/// Result of an SP-CS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpCsOutcome {
    /// Feasible alternatives, best first.
    pub ranking: Ranking,

    /// Number of feasible alternatives each ranked alternative
    /// Pareto-dominates on the subset, parallel to `ranking`.
    pub dominance_counts: Vec<usize>,
}

/// Executes the SP-CS method.
pub struct SpCsScorer;

impl SpCsScorer {
    /// Runs SP-CS over the table.
    ///
    /// Feasibility is judged on exactly the configured subset.
    ///
    /// # Errors
    ///
    /// [`ScoreError::RegionTooNarrow`] when no alternative satisfies the
    /// subset constraints — a distinct signal, not an empty success.
    pub fn run(table: &AlternativeTable, config: &SpCsConfig) -> Result<SpCsOutcome, ScoreError> {
        config.validate().map_err(ScoreError::InvalidConfig)?;

        let width = table.criterion_count();
        if config.directions.len() != width {
            return Err(ScoreError::InvalidConfig(format!(
                "expected {width} direction flags, got {}",
                config.directions.len()
            )));
        }
        if let Some(&bad) = config.criteria.iter().find(|&&c| c >= width) {
            return Err(ScoreError::InvalidConfig(format!(
                "criterion index {bad} out of range for {width} criteria"
            )));
        }

        // Oriented subset vectors of the feasible alternatives: benefit
        // values as-is, cost values negated, so "larger is better"
        // uniformly.
        let mut ids: Vec<u32> = Vec::new();
        let mut oriented: Vec<Vec<f64>> = Vec::new();
        for alt in table.feasible(&config.windows()) {
            ids.push(alt.id);
            oriented.push(
                config
                    .criteria
                    .iter()
                    .map(|&crit| {
                        let v = alt.values[crit];
                        if config.directions[crit].is_benefit() {
                            v
                        } else {
                            -v
                        }
                    })
                    .collect(),
            );
        }

        if ids.is_empty() {
            return Err(ScoreError::RegionTooNarrow);
        }

        let n = ids.len();
        let dim = config.criteria.len();

        let dominance: Vec<usize> = (0..n)
            .map(|a| {
                (0..n)
                    .filter(|&b| a != b && dominates(&oriented[a], &oriented[b]))
                    .count()
            })
            .collect();

        // Tie-break: sum of min-max normalized oriented values.
        let spans: Vec<(f64, f64)> = (0..dim)
            .map(|j| {
                oriented
                    .iter()
                    .map(|row| row[j])
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    })
            })
            .collect();
        let achievement: Vec<f64> = oriented
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&spans)
                    .map(|(&v, &(lo, hi))| if hi - lo < EPS { 0.0 } else { (v - lo) / (hi - lo) })
                    .sum()
            })
            .collect();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            dominance[b]
                .cmp(&dominance[a])
                .then_with(|| {
                    achievement[b]
                        .partial_cmp(&achievement[a])
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        Ok(SpCsOutcome {
            ranking: order.iter().map(|&i| ids[i]).collect(),
            dominance_counts: order.iter().map(|&i| dominance[i]).collect(),
        })
    }
}

/// Pareto dominance on oriented vectors: `a` is at least as good
/// everywhere and strictly better somewhere.
fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b) {
        if va < vb {
            return false;
        }
        if va > vb {
            strictly_better = true;
        }
    }
    strictly_better
}
