//! AHP configuration.

use crate::table::{CriterionSpec, Direction};

/// Configuration for the AHP scorer.
///
/// The scorer operates on a selected subset of criteria. `lower` and
/// `upper` are parallel to `criteria` (one window per selected
/// criterion), while `directions` covers the full table width and is
/// indexed through `criteria`.
///
/// `comparisons` is the flattened upper triangle of the criterion
/// importance matrix, ordered `(0,1), (0,2), ..., (1,2), (1,3), ...`
/// over the selected criteria. A ratio of exactly 0 is treated as a
/// negligible-but-nonzero ratio so the reciprocal stays finite.
///
/// # Examples
///
/// ```
/// use mcda_consensus::ahp::AhpConfig;
/// use mcda_consensus::table::Direction;
///
/// let config = AhpConfig::new(vec![0.0, 0.0], vec![10.0, 10.0])
///     .with_criteria(vec![0, 1])
///     .with_comparisons(vec![3.0])
///     .with_directions(vec![Direction::Benefit, Direction::Cost]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AhpConfig {
    /// Lower bounds, parallel to `criteria`.
    pub lower: Vec<f64>,
    /// Upper bounds, parallel to `criteria`.
    pub upper: Vec<f64>,
    /// Indices of the criteria taking part in the comparison.
    pub criteria: Vec<usize>,
    /// Flattened upper-triangular importance ratios between selected criteria.
    pub comparisons: Vec<f64>,
    /// Benefit/cost flags for the full table width.
    pub directions: Vec<Direction>,
}

impl AhpConfig {
    /// Creates a configuration with the given windows and no criteria selected.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            lower,
            upper,
            criteria: Vec::new(),
            comparisons: Vec::new(),
            directions: Vec::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: Vec<usize>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_comparisons(mut self, comparisons: Vec<f64>) -> Self {
        self.comparisons = comparisons;
        self
    }

    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Full-width feasibility windows, one per table column. Unselected
    /// criteria get an unbounded window and accept everything.
    ///
    /// Criterion indices must already be validated against the table
    /// width (the scorer checks them before filtering).
    pub fn windows(&self) -> Vec<CriterionSpec> {
        let mut windows = vec![CriterionSpec::unbounded(); self.directions.len()];
        for (i, &crit) in self.criteria.iter().enumerate() {
            windows[crit] = CriterionSpec::new(self.lower[i], self.upper[i]);
        }
        windows
    }

    /// Validates the configuration shape.
    pub fn validate(&self) -> Result<(), String> {
        let dim = self.criteria.len();
        if dim == 0 {
            return Err("at least one criterion must be selected".into());
        }
        if self.lower.len() != dim || self.upper.len() != dim {
            return Err(format!(
                "bounds must be parallel to the selected criteria: {dim} criteria, \
                 {} lower, {} upper",
                self.lower.len(),
                self.upper.len()
            ));
        }
        let expected = dim * (dim - 1) / 2;
        if self.comparisons.len() != expected {
            return Err(format!(
                "expected {expected} comparison ratios for {dim} criteria, got {}",
                self.comparisons.len()
            ));
        }
        Ok(())
    }
}
