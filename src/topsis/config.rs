//! TOPSIS configuration.

use crate::table::{CriterionSpec, Direction};

/// Configuration for the TOPSIS scorer.
///
/// All four sequences cover the full table width. Weights need not be
/// pre-normalized; the scorer normalizes them to sum 1 before use.
///
/// # Examples
///
/// ```
/// use mcda_consensus::topsis::TopsisConfig;
/// use mcda_consensus::table::Direction;
///
/// let config = TopsisConfig::new(vec![0.0, 0.0], vec![10.0, 10.0])
///     .with_weights(vec![2.0, 1.0])
///     .with_directions(vec![Direction::Benefit, Direction::Cost]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TopsisConfig {
    /// Lower bounds, one per criterion.
    pub lower: Vec<f64>,
    /// Upper bounds, one per criterion.
    pub upper: Vec<f64>,
    /// Nonnegative importance weights, one per criterion.
    pub weights: Vec<f64>,
    /// Benefit/cost flags, one per criterion.
    pub directions: Vec<Direction>,
}

impl TopsisConfig {
    /// Creates a configuration with uniform weights and benefit directions.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        let width = lower.len();
        Self {
            lower,
            upper,
            weights: vec![1.0; width],
            directions: vec![Direction::Benefit; width],
        }
    }

    /// Builds the configuration from per-criterion specs, one per
    /// table column.
    pub fn from_criteria(criteria: &[CriterionSpec]) -> Self {
        Self {
            lower: criteria.iter().map(|c| c.lower).collect(),
            upper: criteria.iter().map(|c| c.upper).collect(),
            weights: criteria.iter().map(|c| c.weight).collect(),
            directions: criteria.iter().map(|c| c.direction).collect(),
        }
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Per-criterion feasibility windows, one per table column.
    pub fn windows(&self) -> Vec<CriterionSpec> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| CriterionSpec::new(lo, hi))
            .collect()
    }

    /// Validates the configuration shape.
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
        if self.weights.iter().any(|&w| w < 0.0) {
            return Err("weights must be nonnegative".into());
        }
        if self.weights.iter().sum::<f64>() <= 0.0 {
            return Err("at least one weight must be positive".into());
        }
        Ok(())
    }
}
