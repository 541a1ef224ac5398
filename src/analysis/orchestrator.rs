//! Fan-out of all scoring methods plus failure isolation.

use super::consensus::{aggregate_consensus, ConsensusEntry};
use super::correlation::CorrelationMatrix;
use super::Method;
use crate::ahp::{AhpConfig, AhpScorer};
use crate::error::{AnalysisError, ScoreError};
use crate::rsm::{RsmConfig, RsmScorer};
use crate::spcs::{SpCsConfig, SpCsScorer};
use crate::table::{AlternativeTable, CriterionSpec, Direction, Ranking};
use crate::topsis::{TopsisConfig, TopsisScorer};
use crate::uta::{UtaConfig, UtaScorer};

/// Rankings with fewer entries than this cannot be correlated and are
/// discarded before the meta-analysis.
pub const MIN_USABLE_RANKING: usize = 2;

/// Fewer usable methods than this leave nothing to compare, so the
/// analysis aborts with [`AnalysisError::NotEnoughMethods`].
pub const MIN_USABLE_METHODS: usize = 2;

/// Segment count handed to UTA* under the shared default configuration.
const DEFAULT_UTA_SEGMENTS: i32 = 5;

/// Shared configuration the orchestrator specializes per method.
///
/// All sequences cover the full table width. Weights need not be
/// pre-normalized; each weighted method normalizes on its own.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    /// Lower bounds, one per criterion.
    pub lower: Vec<f64>,
    /// Upper bounds, one per criterion.
    pub upper: Vec<f64>,
    /// Importance weights, one per criterion.
    pub weights: Vec<f64>,
    /// Benefit/cost flags, one per criterion.
    pub directions: Vec<Direction>,
}

impl AnalysisConfig {
    /// Wide-open defaults for a table: bounds spanning the observed
    /// value range, uniform weights, benefit direction everywhere.
    pub fn defaults_for(table: &AlternativeTable) -> Self {
        let width = table.criterion_count();
        let mut lower = Vec::with_capacity(width);
        let mut upper = Vec::with_capacity(width);
        for j in 0..width {
            // value_range is Some for every in-range index.
            let (lo, hi) = table.value_range(j).unwrap_or((0.0, 0.0));
            lower.push(lo);
            upper.push(hi);
        }
        Self {
            lower,
            upper,
            weights: vec![1.0 / width as f64; width],
            directions: vec![Direction::Benefit; width],
        }
    }

    /// Builds the shared configuration criterion-by-criterion from
    /// [`CriterionSpec`]s, one per table column.
    pub fn from_criteria(criteria: &[CriterionSpec]) -> Self {
        Self {
            lower: criteria.iter().map(|c| c.lower).collect(),
            upper: criteria.iter().map(|c| c.upper).collect(),
            weights: criteria.iter().map(|c| c.weight).collect(),
            directions: criteria.iter().map(|c| c.direction).collect(),
        }
    }

    /// Validates sequence lengths. Per-method constraints (weight signs,
    /// segment counts) are left to the scorers so their failures stay
    /// isolated per method.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.lower.len();
        if width == 0 {
            return Err("at least one criterion is required".into());
        }
        if self.upper.len() != width
            || self.weights.len() != width
            || self.directions.len() != width
        {
            return Err(format!(
                "bounds, weights and directions must all cover {width} criteria"
            ));
        }
        Ok(())
    }
}

/// Everything the analysis produces for the caller to display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    /// One ranking per method, in invocation order. A method that
    /// failed or found nothing contributes an empty ranking.
    pub rankings: Vec<(Method, Ranking)>,

    /// Pairwise Spearman matrix over the usable methods.
    pub correlation: CorrelationMatrix,

    /// Consensus order, ascending by average rank.
    pub consensus: Vec<ConsensusEntry>,
}

/// Runs all five scoring methods under the shared configuration and
/// cross-validates their rankings.
///
/// Per-method failures are logged and downgraded to empty rankings; a
/// failing method never aborts its siblings. Methods whose ranking has
/// fewer than [`MIN_USABLE_RANKING`] entries are excluded from the
/// correlation matrix and the consensus.
///
/// # Errors
///
/// [`AnalysisError::NotEnoughMethods`] when fewer than
/// [`MIN_USABLE_METHODS`] methods produced usable rankings.
pub fn perform_analysis(
    table: &AlternativeTable,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    let rankings: Vec<(Method, Ranking)> = run_all(table, config)
        .into_iter()
        .map(|(method, result)| {
            let ranking = result.unwrap_or_else(|err| {
                tracing::warn!(%method, error = %err, "scoring method failed, using empty ranking");
                Vec::new()
            });
            (method, ranking)
        })
        .collect();

    let usable: Vec<(Method, Ranking)> = rankings
        .iter()
        .filter(|(_, ranking)| ranking.len() >= MIN_USABLE_RANKING)
        .cloned()
        .collect();

    if usable.len() < MIN_USABLE_METHODS {
        return Err(AnalysisError::NotEnoughMethods {
            usable: usable.len(),
        });
    }

    let correlation = CorrelationMatrix::compute(&usable);
    let consensus = aggregate_consensus(&usable);

    Ok(AnalysisReport {
        rankings,
        correlation,
        consensus,
    })
}

#[cfg(not(feature = "parallel"))]
fn run_all(
    table: &AlternativeTable,
    config: &AnalysisConfig,
) -> Vec<(Method, Result<Ranking, ScoreError>)> {
    Method::ALL
        .iter()
        .map(|&method| (method, score_method(method, table, config)))
        .collect()
}

/// The five methods are mutually independent, so they fan out onto the
/// rayon pool; collection joins before any downstream stage reads the
/// results, and indexed collection keeps the method order fixed.
#[cfg(feature = "parallel")]
fn run_all(
    table: &AlternativeTable,
    config: &AnalysisConfig,
) -> Vec<(Method, Result<Ranking, ScoreError>)> {
    use rayon::prelude::*;
    Method::ALL
        .par_iter()
        .map(|&method| (method, score_method(method, table, config)))
        .collect()
}

/// Specializes the shared configuration for one method and runs it.
fn score_method(
    method: Method,
    table: &AlternativeTable,
    config: &AnalysisConfig,
) -> Result<Ranking, ScoreError> {
    config
        .validate()
        .map_err(ScoreError::InvalidConfig)?;

    match method {
        Method::Topsis => {
            let config = TopsisConfig::new(config.lower.clone(), config.upper.clone())
                .with_weights(config.weights.clone())
                .with_directions(config.directions.clone());
            TopsisScorer::run(table, &config).map(|outcome| outcome.ranking)
        }
        Method::Rsm => {
            let config = RsmConfig::new(config.lower.clone(), config.upper.clone())
                .with_directions(config.directions.clone());
            RsmScorer::run(table, &config).map(|outcome| outcome.ranking)
        }
        Method::UtaStar => {
            let config = UtaConfig::new(config.lower.clone(), config.upper.clone())
                .with_weights(config.weights.clone())
                .with_directions(config.directions.clone())
                .with_segments(vec![DEFAULT_UTA_SEGMENTS; config.lower.len()]);
            UtaScorer::run(table, &config).map(|outcome| outcome.ranking)
        }
        Method::Ahp => {
            let width = config.lower.len();
            let config = AhpConfig::new(config.lower.clone(), config.upper.clone())
                .with_criteria((0..width).collect())
                .with_comparisons(comparisons_from_weights(&config.weights))
                .with_directions(config.directions.clone());
            AhpScorer::run(table, &config).map(|outcome| outcome.ranking)
        }
        Method::SpCs => {
            let subset = top_criteria_by_weight(&config.weights);
            let lower = subset.iter().map(|&j| config.lower[j]).collect();
            let upper = subset.iter().map(|&j| config.upper[j]).collect();
            let config = SpCsConfig::new(lower, upper)
                .with_criteria(subset)
                .with_directions(config.directions.clone());
            SpCsScorer::run(table, &config).map(|outcome| outcome.ranking)
        }
    }
}

/// Flattened upper-triangular importance ratios derived from a weight
/// vector: entry (i, j) is `w_i / w_j`, or 1 when `w_j` is zero.
fn comparisons_from_weights(weights: &[f64]) -> Vec<f64> {
    let n = weights.len();
    let mut comparisons = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            if weights[j] == 0.0 {
                comparisons.push(1.0);
            } else {
                comparisons.push(weights[i] / weights[j]);
            }
        }
    }
    comparisons
}

/// The up-to-3 highest-weighted criterion indices, heaviest first.
/// With 3 or fewer criteria, all of them in table order.
fn top_criteria_by_weight(weights: &[f64]) -> Vec<usize> {
    if weights.len() <= 3 {
        return (0..weights.len()).collect();
    }
    let mut indices: Vec<usize> = (0..weights.len()).collect();
    // Stable sort: equal weights keep ascending index order.
    indices.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices.truncate(3);
    indices
}
