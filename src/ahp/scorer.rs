//! AHP scoring.

use super::config::AhpConfig;
use crate::error::ScoreError;
use crate::table::{AlternativeTable, Ranking};

/// Ratio values of exactly zero are replaced with this before division.
const EPS: f64 = 1e-9;

/// Random consistency index by matrix dimension (1..=10), after Saaty.
/// Dimensions above 10 are clamped to the last entry.
const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Result of an AHP run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AhpOutcome {
    /// Alternative identifiers, best first. Empty when the bounds
    /// exclude every alternative.
    pub ranking: Ranking,

    /// Criterion weights derived from the comparison matrix,
    /// parallel to the selected criteria.
    pub criteria_weights: Vec<f64>,

    /// Consistency ratio of the comparison matrix. Values above ~0.1
    /// conventionally indicate inconsistent judgements. Diagnostic only.
    pub consistency_ratio: f64,
}

/// Executes the AHP method.
pub struct AhpScorer;

impl AhpScorer {
    /// Runs AHP over the table.
    ///
    /// Alternatives whose value on any selected criterion falls outside
    /// that criterion's window are dropped before scoring; an empty
    /// survivor set yields an empty ranking, not an error.
    pub fn run(table: &AlternativeTable, config: &AhpConfig) -> Result<AhpOutcome, ScoreError> {
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

        let dim = config.criteria.len();
        let (weights, consistency_ratio) = derive_criteria_weights(config, dim);

        // Filter by the per-criterion windows, keeping the selected sub-vectors.
        let mut ids: Vec<u32> = Vec::new();
        let mut rows: Vec<Vec<f64>> = Vec::new();
        for alt in table.feasible(&config.windows()) {
            ids.push(alt.id);
            rows.push(config.criteria.iter().map(|&crit| alt.values[crit]).collect());
        }

        if rows.is_empty() {
            return Ok(AhpOutcome {
                ranking: Vec::new(),
                criteria_weights: weights,
                consistency_ratio,
            });
        }

        let n = rows.len();

        // Per-criterion priority vectors from pairwise alternative ratios.
        let mut priorities = vec![vec![0.0; n]; dim];
        for (k, priority) in priorities.iter_mut().enumerate() {
            let benefit = config.directions[config.criteria[k]].is_benefit();
            let column: Vec<f64> = rows
                .iter()
                .map(|row| if row[k] == 0.0 { EPS } else { row[k] })
                .collect();

            let mut comp = vec![vec![0.0; n]; n];
            for a in 0..n {
                for b in 0..n {
                    comp[a][b] = if benefit {
                        column[a] / column[b]
                    } else {
                        column[b] / column[a]
                    };
                }
            }

            let col_sums: Vec<f64> = (0..n).map(|b| (0..n).map(|a| comp[a][b]).sum()).collect();
            for a in 0..n {
                priority[a] = (0..n).map(|b| comp[a][b] / col_sums[b]).sum::<f64>() / n as f64;
            }
        }

        let mut scored: Vec<(u32, f64)> = ids
            .iter()
            .enumerate()
            .map(|(a, &id)| {
                let score: f64 = (0..dim).map(|k| weights[k] * priorities[k][a]).sum();
                (id, score)
            })
            .collect();

        // Stable descending sort: ties keep filtered order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(AhpOutcome {
            ranking: scored.into_iter().map(|(id, _)| id).collect(),
            criteria_weights: weights,
            consistency_ratio,
        })
    }
}

/// Builds the criterion comparison matrix, derives weights by the
/// column-normalize-and-average approximation, and computes the
/// consistency ratio.
fn derive_criteria_weights(config: &AhpConfig, dim: usize) -> (Vec<f64>, f64) {
    let mut matrix = vec![vec![1.0; dim]; dim];
    let mut next = 0;
    for i in 0..dim {
        for j in (i + 1)..dim {
            let mut ratio = config.comparisons[next];
            if ratio == 0.0 {
                ratio = EPS;
            }
            matrix[i][j] = ratio;
            matrix[j][i] = 1.0 / ratio;
            next += 1;
        }
    }

    let col_sums: Vec<f64> = (0..dim)
        .map(|j| (0..dim).map(|i| matrix[i][j]).sum())
        .collect();
    let weights: Vec<f64> = (0..dim)
        .map(|i| {
            (0..dim)
                .map(|j| matrix[i][j] / col_sums[j])
                .sum::<f64>()
                / dim as f64
        })
        .collect();

    // Consistency ratio: lambda_max via A*w, CI scaled by the random index.
    let consistency_ratio = if dim > 1 {
        let lambda_max = (0..dim)
            .map(|i| {
                let aw: f64 = (0..dim).map(|j| matrix[i][j] * weights[j]).sum();
                aw / weights[i]
            })
            .sum::<f64>()
            / dim as f64;
        let ci = (lambda_max - dim as f64) / (dim as f64 - 1.0);
        let ri = RANDOM_INDEX[dim.min(RANDOM_INDEX.len()) - 1];
        if ri != 0.0 {
            ci / ri
        } else {
            0.0
        }
    } else {
        0.0
    };

    (weights, consistency_ratio)
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

    fn benefit_config(criteria: usize) -> AhpConfig {
        AhpConfig::new(vec![f64::NEG_INFINITY; criteria], vec![f64::INFINITY; criteria])
            .with_criteria((0..criteria).collect())
            .with_comparisons(vec![1.0; criteria * (criteria - 1) / 2])
            .with_directions(vec![Direction::Benefit; criteria])
    }

    #[test]
    fn test_dominant_alternative_ranks_first() {
        // Alternative 2 dominates 1 on both criteria, equal importance.
        let table = table(&[(1, &[4.0, 6.0]), (2, &[5.0, 8.0]), (3, &[4.0, 5.0])]);
        let outcome = AhpScorer::run(&table, &benefit_config(2)).unwrap();
        assert_eq!(outcome.ranking[0], 2);
    }

    #[test]
    fn test_cost_direction_reverses_preference() {
        let t = table(&[(1, &[10.0]), (2, &[2.0])]);
        let config = AhpConfig::new(vec![0.0], vec![100.0])
            .with_criteria(vec![0])
            .with_directions(vec![Direction::Cost]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![2, 1]);
    }

    #[test]
    fn test_bounds_filter_alternatives() {
        let t = table(&[(1, &[1.0]), (2, &[5.0]), (3, &[9.0])]);
        let config = AhpConfig::new(vec![2.0], vec![8.0])
            .with_criteria(vec![0])
            .with_directions(vec![Direction::Benefit]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![2]);
    }

    #[test]
    fn test_empty_region_is_not_an_error() {
        let t = table(&[(1, &[1.0]), (2, &[2.0])]);
        let config = AhpConfig::new(vec![100.0], vec![200.0])
            .with_criteria(vec![0])
            .with_directions(vec![Direction::Benefit]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert!(outcome.ranking.is_empty());
    }

    #[test]
    fn test_weights_from_unbalanced_comparison() {
        // Criterion 0 is three times as important as criterion 1.
        let t = table(&[(1, &[1.0, 9.0]), (2, &[2.0, 1.0])]);
        let config = AhpConfig::new(vec![0.0; 2], vec![10.0; 2])
            .with_criteria(vec![0, 1])
            .with_comparisons(vec![3.0])
            .with_directions(vec![Direction::Benefit; 2]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert!((outcome.criteria_weights[0] - 0.75).abs() < 1e-10);
        assert!((outcome.criteria_weights[1] - 0.25).abs() < 1e-10);
        // Criterion 0 dominates the aggregate: alternative 2 wins.
        assert_eq!(outcome.ranking[0], 2);
    }

    #[test]
    fn test_two_by_two_is_always_consistent() {
        let t = table(&[(1, &[1.0, 2.0]), (2, &[2.0, 1.0])]);
        let config = AhpConfig::new(vec![0.0; 2], vec![10.0; 2])
            .with_criteria(vec![0, 1])
            .with_comparisons(vec![5.0])
            .with_directions(vec![Direction::Benefit; 2]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        // A 2x2 reciprocal matrix is always perfectly consistent; CR uses
        // the random-index 0 convention and reports 0.
        assert!(outcome.consistency_ratio.abs() < 1e-10);
    }

    #[test]
    fn test_zero_values_do_not_divide_by_zero() {
        let t = table(&[(1, &[0.0]), (2, &[5.0])]);
        let config = AhpConfig::new(vec![0.0], vec![10.0])
            .with_criteria(vec![0])
            .with_directions(vec![Direction::Benefit]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking, vec![2, 1]);
        assert!(outcome.ranking.iter().all(|id| [1, 2].contains(id)));
    }

    #[test]
    fn test_zero_comparison_ratio_guarded() {
        let t = table(&[(1, &[1.0, 1.0]), (2, &[2.0, 2.0])]);
        let config = AhpConfig::new(vec![0.0; 2], vec![10.0; 2])
            .with_criteria(vec![0, 1])
            .with_comparisons(vec![0.0])
            .with_directions(vec![Direction::Benefit; 2]);
        let outcome = AhpScorer::run(&t, &config).unwrap();
        assert_eq!(outcome.ranking.len(), 2);
        assert!(outcome.criteria_weights.iter().all(|w| w.is_finite()));
    }

    #[test]
    fn test_direction_length_mismatch_rejected() {
        let t = table(&[(1, &[1.0, 2.0])]);
        let config = AhpConfig::new(vec![0.0; 2], vec![10.0; 2])
            .with_criteria(vec![0, 1])
            .with_comparisons(vec![1.0])
            .with_directions(vec![Direction::Benefit]);
        assert!(matches!(
            AhpScorer::run(&t, &config),
            Err(ScoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_criterion_index_out_of_range_rejected() {
        let t = table(&[(1, &[1.0])]);
        let config = AhpConfig::new(vec![0.0], vec![10.0])
            .with_criteria(vec![5])
            .with_directions(vec![Direction::Benefit]);
        assert!(matches!(
            AhpScorer::run(&t, &config),
            Err(ScoreError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_no_duplicate_ids_in_ranking() {
        let t = table(&[
            (1, &[3.0, 3.0]),
            (2, &[3.0, 3.0]),
            (3, &[3.0, 3.0]),
        ]);
        let outcome = AhpScorer::run(&t, &benefit_config(2)).unwrap();
        let mut seen = outcome.ranking.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), outcome.ranking.len());
    }
}
