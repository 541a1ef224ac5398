//! TOPSIS scoring.

use super::config::TopsisConfig;
use crate::error::ScoreError;
use crate::table::{AlternativeTable, Ranking};

/// Substituted for denominators that would otherwise be exactly zero.
const EPS: f64 = 1e-9;

/// Result of a TOPSIS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisOutcome {
    /// Alternative identifiers, best first. Empty when the bounds
    /// exclude every alternative.
    pub ranking: Ranking,

    /// Relative closeness to the ideal point, parallel to `ranking`.
    /// Values lie in `[0, 1]`; higher is better.
    pub closeness: Vec<f64>,
}

/// Executes the TOPSIS method.
pub struct TopsisScorer;

impl TopsisScorer {
    /// Runs TOPSIS over the table.
    ///
    /// Alternatives outside any criterion window are dropped first; an
    /// empty survivor set yields an empty ranking, not an error.
    pub fn run(
        table: &AlternativeTable,
        config: &TopsisConfig,
    ) -> Result<TopsisOutcome, ScoreError> {
        config.validate().map_err(ScoreError::InvalidConfig)?;

        let width = table.criterion_count();
        if config.lower.len() != width {
            return Err(ScoreError::InvalidConfig(format!(
                "configuration covers {} criteria but the table has {width}",
                config.lower.len()
            )));
        }

        let survivors: Vec<(u32, &[f64])> = table
            .feasible(&config.windows())
            .into_iter()
            .map(|alt| (alt.id, alt.values.as_slice()))
            .collect();

        if survivors.is_empty() {
            return Ok(TopsisOutcome {
                ranking: Vec::new(),
                closeness: Vec::new(),
            });
        }

        let n = survivors.len();
        let weight_sum: f64 = config.weights.iter().sum();

        // Weighted vector-normalized decision matrix, column by column.
        let mut matrix = vec![vec![0.0; width]; n];
        for j in 0..width {
            let norm = survivors
                .iter()
                .map(|(_, values)| values[j] * values[j])
                .sum::<f64>()
                .sqrt();
            let norm = if norm == 0.0 { EPS } else { norm };
            let weight = config.weights[j] / weight_sum;
            for (i, (_, values)) in survivors.iter().enumerate() {
                matrix[i][j] = values[j] / norm * weight;
            }
        }

        // Ideal and anti-ideal points, per direction.
        let mut best = vec![0.0; width];
        let mut worst = vec![0.0; width];
        for j in 0..width {
            let column = matrix.iter().map(|row| row[j]);
            let (min, max) = column.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
            if config.directions[j].is_benefit() {
                best[j] = max;
                worst[j] = min;
            } else {
                best[j] = min;
                worst[j] = max;
            }
        }

        let mut scored: Vec<(u32, f64)> = survivors
            .iter()
            .enumerate()
            .map(|(i, &(id, _))| {
                let d_best = distance(&matrix[i], &best);
                let d_worst = distance(&matrix[i], &worst);
                let denom = d_best + d_worst;
                let denom = if denom == 0.0 { EPS } else { denom };
                (id, d_worst / denom)
            })
            .collect();

        // Stable descending sort by closeness.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let (ranking, closeness) = scored.into_iter().unzip();
        Ok(TopsisOutcome { ranking, closeness })
    }
}

fn distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}
