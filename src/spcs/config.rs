//! SP-CS configuration.

use crate::table::{CriterionSpec, Direction};

/// Largest criterion subset SP-CS accepts.
pub const MAX_SUBSET: usize = 3;

/// Configuration for the SP-CS scorer.
///
/// `criteria` selects the subset under consideration (1 to
/// [`MAX_SUBSET`] entries); `lower` and `upper` are parallel to it,
/// while `directions` covers the full table width and is indexed
/// through `criteria`.
///
/// # Examples
///
/// ```
/// use mcda_consensus::spcs::SpCsConfig;
///
/// let config = SpCsConfig::new(vec![0.0, 0.0], vec![10.0, 10.0])
///     .with_criteria(vec![2, 4]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SpCsConfig {
    /// Lower bounds, parallel to `criteria`.
    pub lower: Vec<f64>,
    /// Upper bounds, parallel to `criteria`.
    pub upper: Vec<f64>,
    /// Indices of the criteria under consideration.
    pub criteria: Vec<usize>,
    /// Benefit/cost flags for the full table width.
    pub directions: Vec<Direction>,
}

impl SpCsConfig {
    /// Creates a configuration with the given windows and no criteria selected.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        Self {
            lower,
            upper,
            criteria: Vec::new(),
            directions: Vec::new(),
        }
    }

    pub fn with_criteria(mut self, criteria: Vec<usize>) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Full-width feasibility windows, one per table column. Criteria
    /// outside the subset get an unbounded window and accept everything.
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
        if dim > MAX_SUBSET {
            return Err(format!(
                "at most {MAX_SUBSET} criteria may be selected, got {dim}"
            ));
        }
        if self.lower.len() != dim || self.upper.len() != dim {
            return Err(format!(
                "bounds must be parallel to the selected criteria: {dim} criteria, \
                 {} lower, {} upper",
                self.lower.len(),
                self.upper.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let config = SpCsConfig::new(vec![0.0], vec![1.0]).with_criteria(vec![0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_subset() {
        assert!(SpCsConfig::new(vec![], vec![]).validate().is_err());
    }

    #[test]
    fn test_validate_oversized_subset() {
        let config =
            SpCsConfig::new(vec![0.0; 4], vec![1.0; 4]).with_criteria(vec![0, 1, 2, 3]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_mismatch() {
        let config = SpCsConfig::new(vec![0.0], vec![1.0]).with_criteria(vec![0, 1]);
        assert!(config.validate().is_err());
    }
}
