//! UTA* configuration.

use crate::table::{CriterionSpec, Direction};

/// Configuration for the UTA* scorer.
///
/// All sequences cover the full table width. Weights need not be
/// pre-normalized. `segments` gives the number of piecewise-linear
/// segments approximating each criterion's marginal utility; every
/// entry must be at least 1 (checked by the scorer, which reports the
/// dedicated [`ScoreError::SegmentCountNotPositive`] variant).
///
/// [`ScoreError::SegmentCountNotPositive`]: crate::error::ScoreError::SegmentCountNotPositive
///
/// # Examples
///
/// ```
/// use mcda_consensus::uta::UtaConfig;
///
/// let config = UtaConfig::new(vec![0.0, 0.0], vec![10.0, 10.0])
///     .with_segments(vec![5, 5]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct UtaConfig {
    /// Lower bounds, one per criterion.
    pub lower: Vec<f64>,
    /// Upper bounds, one per criterion.
    pub upper: Vec<f64>,
    /// Nonnegative importance weights, one per criterion.
    pub weights: Vec<f64>,
    /// Benefit/cost flags, one per criterion.
    pub directions: Vec<Direction>,
    /// Piecewise-linear segment counts, one per criterion.
    pub segments: Vec<i32>,
}

impl UtaConfig {
    /// Creates a configuration with uniform weights, benefit directions,
    /// and 5 segments per criterion.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        let width = lower.len();
        Self {
            lower,
            upper,
            weights: vec![1.0; width],
            directions: vec![Direction::Benefit; width],
            segments: vec![5; width],
        }
    }

    /// Builds the configuration from per-criterion specs, one per
    /// table column, with 5 segments per criterion.
    pub fn from_criteria(criteria: &[CriterionSpec]) -> Self {
        Self {
            lower: criteria.iter().map(|c| c.lower).collect(),
            upper: criteria.iter().map(|c| c.upper).collect(),
            weights: criteria.iter().map(|c| c.weight).collect(),
            directions: criteria.iter().map(|c| c.direction).collect(),
            segments: vec![5; criteria.len()],
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

    pub fn with_segments(mut self, segments: Vec<i32>) -> Self {
        self.segments = segments;
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
    ///
    /// Segment positivity is deliberately left to the scorer so it can
    /// be reported as its own error condition.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.lower.len();
        if width == 0 {
            return Err("at least one criterion is required".into());
        }
        if self.upper.len() != width
            || self.weights.len() != width
            || self.directions.len() != width
            || self.segments.len() != width
        {
            return Err(format!(
                "bounds, weights, directions and segment counts must all cover {width} criteria"
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
