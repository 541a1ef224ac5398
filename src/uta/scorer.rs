//! UTA* scoring.

use super::config::UtaConfig;
use crate::error::ScoreError;
use crate::table::{AlternativeTable, Ranking};

/// Windows narrower than this are treated as degenerate (single point).
const EPS: f64 = 1e-9;

/// Result of a UTA* run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtaOutcome {
    /// Alternative identifiers, best first.
    pub ranking: Ranking,

    /// Aggregated utility per alternative, parallel to `ranking`.
    /// Values lie in `[0, 1]`; higher is better.
    pub utilities: Vec<f64>,
}

/// Executes the UTA* method.
pub struct UtaScorer;

impl UtaScorer {
    /// Runs UTA* over the table.
    ///
    /// # Errors
    ///
    /// - [`ScoreError::SegmentCountNotPositive`] when any segment count
    ///   is below 1.
    /// - [`ScoreError::RegionTooNarrow`] when the bounds exclude every
    ///   alternative. Unlike AHP/TOPSIS/RSM, an empty region here is an
    ///   error the caller must surface.
    pub fn run(table: &AlternativeTable, config: &UtaConfig) -> Result<UtaOutcome, ScoreError> {
        config.validate().map_err(ScoreError::InvalidConfig)?;

        let width = table.criterion_count();
        if config.lower.len() != width {
            return Err(ScoreError::InvalidConfig(format!(
                "configuration covers {} criteria but the table has {width}",
                config.lower.len()
            )));
        }
        if config.segments.iter().any(|&s| s < 1) {
            return Err(ScoreError::SegmentCountNotPositive);
        }

        let survivors: Vec<(u32, &[f64])> = table
            .feasible(&config.windows())
            .into_iter()
            .map(|alt| (alt.id, alt.values.as_slice()))
            .collect();

        if survivors.is_empty() {
            return Err(ScoreError::RegionTooNarrow);
        }

        let weight_sum: f64 = config.weights.iter().sum();

        let mut scored: Vec<(u32, f64)> = survivors
            .iter()
            .map(|&(id, values)| {
                let utility: f64 = (0..width)
                    .map(|j| {
                        let weight = config.weights[j] / weight_sum;
                        weight * marginal_utility(
                            values[j],
                            config.lower[j],
                            config.upper[j],
                            config.directions[j].is_benefit(),
                            config.segments[j],
                        )
                    })
                    .sum();
                (id, utility)
            })
            .collect();

        // Stable descending sort by aggregated utility.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let (ranking, utilities) = scored.into_iter().unzip();
        Ok(UtaOutcome { ranking, utilities })
    }
}

/// Marginal utility of one criterion value on an `s`-segment grid.
///
/// The value is normalized over the window (cost criteria reflected),
/// then snapped down to the nearest breakpoint. Equal utility increments
/// per segment — a uniform preference prior.
fn marginal_utility(value: f64, lower: f64, upper: f64, benefit: bool, segments: i32) -> f64 {
    let span = upper - lower;
    let mut z = if span < EPS {
        0.0
    } else {
        ((value - lower) / span).clamp(0.0, 1.0)
    };
    if !benefit {
        z = 1.0 - z;
    }
    let s = segments as f64;
    (z * s).floor().min(s) / s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Alternative, Direction};

    fn table(rows: &[(u32, &[f64])]) -> AlternativeTable {
        AlternativeTable::new(
            rows.iter()
                .map(|&(id, values)| Alternative::new(id, values.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_dominant_alternative_ranks_first() {
        let t = table(&[(1, &[2.0, 3.0]), (2, &[8.0, 9.0]), (3, &[5.0, 5.0])]);
        let config = UtaConfig::new(vec![0.0; 2], vec![10.0; 2]);
        let outcome = UtaScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![2, 3, 1]);
    }

    #[test]
    fn test_region_too_narrow_is_an_error() {
        let t = table(&[(1, &[1.0]), (2, &[2.0])]);
        let config = UtaConfig::new(vec![100.0], vec![200.0]);
        assert_eq!(
            UtaScorer::run(&t, &config),
            Err(ScoreError::RegionTooNarrow)
        );
    }

    #[test]
    fn test_non_positive_segments_is_an_error() {
        let t = table(&[(1, &[1.0]), (2, &[2.0])]);
        let config = UtaConfig::new(vec![0.0], vec![10.0]).with_segments(vec![0]);
        assert_eq!(
            UtaScorer::run(&t, &config),
            Err(ScoreError::SegmentCountNotPositive)
        );
    }

    #[test]
    fn test_cost_direction() {
        let t = table(&[(1, &[9.0]), (2, &[1.0])]);
        let config = UtaConfig::new(vec![0.0], vec![10.0])
            .with_directions(vec![Direction::Cost])
            .with_segments(vec![10]);
        let outcome = UtaScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![2, 1]);
    }

    #[test]
    fn test_coarse_segments_merge_close_alternatives() {
        // 4.0 and 4.9 fall into the same segment of a 2-segment grid over
        // [0, 10]; a 100-segment grid separates them.
        let t = table(&[(1, &[4.0]), (2, &[4.9])]);
        let coarse = UtaConfig::new(vec![0.0], vec![10.0]).with_segments(vec![2]);
        let fine = UtaConfig::new(vec![0.0], vec![10.0]).with_segments(vec![100]);

        let coarse_outcome = UtaScorer::run(&t, &coarse).unwrap();
        assert!((coarse_outcome.utilities[0] - coarse_outcome.utilities[1]).abs() < 1e-12);

        let fine_outcome = UtaScorer::run(&t, &fine).unwrap();
        assert_eq!(fine_outcome.ranking, vec![2, 1]);
    }

    #[test]
    fn test_utilities_bounded() {
        let t = table(&[(1, &[0.0, 10.0]), (2, &[10.0, 0.0]), (3, &[5.0, 5.0])]);
        let config = UtaConfig::new(vec![0.0; 2], vec![10.0; 2]).with_weights(vec![3.0, 1.0]);
        let outcome = UtaScorer::run(&t, &config).unwrap();
        assert!(outcome
            .utilities
            .iter()
            .all(|&u| (0.0..=1.0).contains(&u)));
    }

    #[test]
    fn test_upper_bound_value_gets_full_utility() {
        let t = table(&[(1, &[10.0])]);
        let config = UtaConfig::new(vec![0.0], vec![10.0]).with_segments(vec![7]);
        let outcome = UtaScorer::run(&t, &config).unwrap();
        assert!((outcome.utilities[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let t = table(&[(5, &[3.0]), (6, &[3.0])]);
        let config = UtaConfig::new(vec![0.0], vec![10.0]);
        let outcome = UtaScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![5, 6]);
    }
}
