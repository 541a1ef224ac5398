//! RSM configuration.

use crate::table::{CriterionSpec, Direction};

/// Configuration for the RSM scorer.
///
/// All sequences cover the full table width. A criterion whose activity
/// flag is `false` takes no part in either filtering or scoring.
///
/// # Examples
///
/// ```
/// use mcda_consensus::rsm::RsmConfig;
///
/// let config = RsmConfig::new(vec![0.0, 0.0], vec![10.0, 10.0])
///     .with_active(vec![true, false]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RsmConfig {
    /// Lower bounds, one per criterion.
    pub lower: Vec<f64>,
    /// Upper bounds, one per criterion.
    pub upper: Vec<f64>,
    /// Activity flags, one per criterion.
    pub active: Vec<bool>,
    /// Benefit/cost flags, one per criterion.
    pub directions: Vec<Direction>,
}

impl RsmConfig {
    /// Creates a configuration with every criterion active and benefit-oriented.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Self {
        let width = lower.len();
        Self {
            lower,
            upper,
            active: vec![true; width],
            directions: vec![Direction::Benefit; width],
        }
    }

    pub fn with_active(mut self, active: Vec<bool>) -> Self {
        self.active = active;
        self
    }

    pub fn with_directions(mut self, directions: Vec<Direction>) -> Self {
        self.directions = directions;
        self
    }

    /// Per-criterion feasibility windows, one per table column.
    /// Inactive criteria get an unbounded window and accept everything.
    pub fn windows(&self) -> Vec<CriterionSpec> {
        self.lower
            .iter()
            .zip(&self.upper)
            .zip(&self.active)
            .map(|((&lo, &hi), &active)| {
                if active {
                    CriterionSpec::new(lo, hi)
                } else {
                    CriterionSpec::unbounded()
                }
            })
            .collect()
    }

    /// Validates the configuration shape.
    pub fn validate(&self) -> Result<(), String> {
        let width = self.lower.len();
        if width == 0 {
            return Err("at least one criterion is required".into());
        }
        if self.upper.len() != width
            || self.active.len() != width
            || self.directions.len() != width
        {
            return Err(format!(
                "bounds, activity flags and directions must all cover {width} criteria"
            ));
        }
        if !self.active.iter().any(|&a| a) {
            return Err("at least one criterion must be active".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        assert!(RsmConfig::new(vec![0.0; 2], vec![1.0; 2]).validate().is_ok());
    }

    #[test]
    fn test_inactive_window_accepts_everything() {
        let config = RsmConfig::new(vec![2.0, 2.0], vec![8.0, 8.0]).with_active(vec![true, false]);
        let windows = config.windows();
        assert!(!windows[0].contains(9.0));
        assert!(windows[1].contains(9.0e9));
    }

    #[test]
    fn test_validate_length_mismatch() {
        let config = RsmConfig::new(vec![0.0; 2], vec![1.0; 2]).with_active(vec![true]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_all_inactive() {
        let config = RsmConfig::new(vec![0.0; 2], vec![1.0; 2]).with_active(vec![false, false]);
        assert!(config.validate().is_err());
    }
}
