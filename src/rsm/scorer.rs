//! RSM scoring.

use super::config::RsmConfig;
use crate::error::ScoreError;
use crate::table::{AlternativeTable, Ranking};

/// Columns whose span inside the region falls below this are treated as
/// constant and contribute no distance.
const EPS: f64 = 1e-9;

/// Result of an RSM run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RsmOutcome {
    /// Alternatives inside the satisficing region, best first.
    /// Empty when the region contains nobody.
    pub ranking: Ranking,

    /// Normalized distance to the region's ideal corner, parallel to
    /// `ranking`. Lower is better.
    pub distances: Vec<f64>,
}

/// Executes the RSM method.
pub struct RsmScorer;

impl RsmScorer {
    /// Runs RSM over the table.
    ///
    /// Only active criteria filter and score. An empty satisficing
    /// region yields an empty ranking, not an error.
    pub fn run(table: &AlternativeTable, config: &RsmConfig) -> Result<RsmOutcome, ScoreError> {
        config.validate().map_err(ScoreError::InvalidConfig)?;

        let width = table.criterion_count();
        if config.lower.len() != width {
            return Err(ScoreError::InvalidConfig(format!(
                "configuration covers {} criteria but the table has {width}",
                config.lower.len()
            )));
        }

        let active: Vec<usize> = (0..width).filter(|&j| config.active[j]).collect();

        let survivors: Vec<(u32, &[f64])> = table
            .feasible(&config.windows())
            .into_iter()
            .map(|alt| (alt.id, alt.values.as_slice()))
            .collect();

        if survivors.is_empty() {
            return Ok(RsmOutcome {
                ranking: Vec::new(),
                distances: Vec::new(),
            });
        }

        // Observed span per active criterion inside the region.
        let spans: Vec<(f64, f64)> = active
            .iter()
            .map(|&j| {
                survivors
                    .iter()
                    .map(|(_, values)| values[j])
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                        (lo.min(v), hi.max(v))
                    })
            })
            .collect();

        let mut scored: Vec<(u32, f64)> = survivors
            .iter()
            .map(|&(id, values)| {
                let squared: f64 = active
                    .iter()
                    .zip(&spans)
                    .map(|(&j, &(lo, hi))| {
                        if hi - lo < EPS {
                            return 0.0;
                        }
                        let mut z = (values[j] - lo) / (hi - lo);
                        if !config.directions[j].is_benefit() {
                            z = 1.0 - z;
                        }
                        (1.0 - z) * (1.0 - z)
                    })
                    .sum();
                (id, squared.sqrt())
            })
            .collect();

        // Stable ascending sort: closest to the ideal corner first.
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let (ranking, distances) = scored.into_iter().unzip();
        Ok(RsmOutcome { ranking, distances })
    }
}
