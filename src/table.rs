//! Shared data model: alternatives, criteria, rankings.
//!
//! Every scoring method consumes the same read-only [`AlternativeTable`]
//! plus method-specific configuration, and produces a [`Ranking`]. The
//! table validates its shape once at construction so the scorers can
//! index freely.

use crate::error::TableError;

/// Whether higher or lower criterion values are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Higher values are better (e.g. quality score).
    Benefit,
    /// Lower values are better (e.g. cost).
    Cost,
}

impl Direction {
    /// Returns `true` for [`Direction::Benefit`].
    pub fn is_benefit(self) -> bool {
        matches!(self, Direction::Benefit)
    }
}

/// Per-criterion feasibility window, orientation, and weight.
///
/// The `[lower, upper]` window is inclusive on both ends. The weight is
/// nonnegative and need not be pre-normalized; weighted scorers normalize
/// before use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionSpec {
    /// Lower feasibility bound (inclusive).
    pub lower: f64,
    /// Upper feasibility bound (inclusive).
    pub upper: f64,
    /// Benefit or cost orientation.
    pub direction: Direction,
    /// Nonnegative importance weight.
    pub weight: f64,
}

impl CriterionSpec {
    /// Creates a spec with the given window, benefit direction, weight 1.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            direction: Direction::Benefit,
            weight: 1.0,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// A window accepting every value, for criteria that take no part
    /// in filtering.
    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Returns `true` if `value` lies inside the inclusive window.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// One candidate being ranked: a unique id and its criterion vector.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    /// Stable unique identifier. Display-name resolution is the caller's job.
    pub id: u32,
    /// Criterion values, one per criterion, in table column order.
    pub values: Vec<f64>,
}

impl Alternative {
    pub fn new(id: u32, values: Vec<f64>) -> Self {
        Self { id, values }
    }
}

/// An ordered best-first sequence of alternative identifiers.
///
/// Empty signals that a method produced no usable output (infeasible
/// region or total failure), which is distinct from a configuration error.
pub type Ranking = Vec<u32>;

/// The input dataset: a rectangular table of alternatives.
///
/// Invariants enforced at construction: at least one alternative, at
/// least one criterion, every row has the same width, no duplicate
/// identifiers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeTable {
    alternatives: Vec<Alternative>,
    criterion_count: usize,
}

impl AlternativeTable {
    /// Builds a table from already-constructed alternatives.
    pub fn new(alternatives: Vec<Alternative>) -> Result<Self, TableError> {
        let Some(first) = alternatives.first() else {
            return Err(TableError::Empty);
        };
        let width = first.values.len();
        if width == 0 {
            return Err(TableError::NoCriteria);
        }
        for alt in &alternatives {
            if alt.values.len() != width {
                return Err(TableError::RaggedRow {
                    id: alt.id,
                    expected: width,
                    found: alt.values.len(),
                });
            }
        }
        for (i, alt) in alternatives.iter().enumerate() {
            if alternatives[..i].iter().any(|other| other.id == alt.id) {
                return Err(TableError::DuplicateId { id: alt.id });
            }
        }
        Ok(Self {
            alternatives,
            criterion_count: width,
        })
    }

    /// Builds a table from the raw row format `[id, v1, v2, ...]`.
    ///
    /// The identifier is the first element of each row, truncated to `u32`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, TableError> {
        let alternatives = rows
            .iter()
            .map(|row| {
                let id = row.first().copied().unwrap_or(0.0) as u32;
                Alternative::new(id, row.iter().skip(1).copied().collect())
            })
            .collect();
        Self::new(alternatives)
    }

    /// Number of criteria (width of every value vector).
    pub fn criterion_count(&self) -> usize {
        self.criterion_count
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    /// All alternatives in insertion order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Alternatives whose values all lie inside the per-criterion
    /// windows, in insertion order.
    ///
    /// Windows are matched to value columns by position. Every scorer's
    /// region filter goes through here.
    pub fn feasible(&self, windows: &[CriterionSpec]) -> Vec<&Alternative> {
        self.alternatives
            .iter()
            .filter(|alt| {
                alt.values
                    .iter()
                    .zip(windows)
                    .all(|(&v, window)| window.contains(v))
            })
            .collect()
    }

    /// Observed `(min, max)` of one criterion column.
    ///
    /// Used to build the wide-open default bounds for the orchestrator.
    pub fn value_range(&self, criterion: usize) -> Option<(f64, f64)> {
        if criterion >= self.criterion_count {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for alt in &self.alternatives {
            let v = alt.values[criterion];
            min = min.min(v);
            max = max.max(v);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_construction() {
        let table = AlternativeTable::new(vec![
            Alternative::new(1, vec![1.0, 2.0]),
            Alternative::new(2, vec![3.0, 4.0]),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.criterion_count(), 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(AlternativeTable::new(vec![]), Err(TableError::Empty));
    }

    #[test]
    fn test_zero_criterion_rows_rejected() {
        // An id-only row must fail at the boundary, not later in a
        // scorer's shape validation.
        assert_eq!(
            AlternativeTable::from_rows(&[vec![1.0], vec![2.0]]),
            Err(TableError::NoCriteria)
        );
        assert_eq!(
            AlternativeTable::new(vec![Alternative::new(1, vec![])]),
            Err(TableError::NoCriteria)
        );
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = AlternativeTable::new(vec![
            Alternative::new(1, vec![1.0, 2.0]),
            Alternative::new(2, vec![3.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                id: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = AlternativeTable::new(vec![
            Alternative::new(7, vec![1.0]),
            Alternative::new(7, vec![2.0]),
        ])
        .unwrap_err();
        assert_eq!(err, TableError::DuplicateId { id: 7 });
    }

    #[test]
    fn test_from_rows() {
        let table = AlternativeTable::from_rows(&[
            vec![10.0, 1.5, 2.5],
            vec![11.0, 3.5, 4.5],
        ])
        .unwrap();
        assert_eq!(table.alternatives()[0].id, 10);
        assert_eq!(table.alternatives()[1].values, vec![3.5, 4.5]);
    }

    #[test]
    fn test_value_range() {
        let table = AlternativeTable::from_rows(&[
            vec![1.0, 5.0, -2.0],
            vec![2.0, 9.0, 4.0],
            vec![3.0, 7.0, 0.0],
        ])
        .unwrap();
        assert_eq!(table.value_range(0), Some((5.0, 9.0)));
        assert_eq!(table.value_range(1), Some((-2.0, 4.0)));
        assert_eq!(table.value_range(2), None);
    }

    #[test]
    fn test_criterion_spec_contains() {
        let spec = CriterionSpec::new(2.0, 8.0);
        assert!(spec.contains(2.0));
        assert!(spec.contains(8.0));
        assert!(!spec.contains(1.999));
        assert!(!spec.contains(8.001));
        assert!(CriterionSpec::unbounded().contains(-1.0e300));
    }

    #[test]
    fn test_feasible_filters_by_window() {
        let table = AlternativeTable::from_rows(&[
            vec![1.0, 5.0, 3.0],
            vec![2.0, 50.0, 3.0],
            vec![3.0, 7.0, -99.0],
        ])
        .unwrap();
        let windows = vec![CriterionSpec::new(0.0, 10.0), CriterionSpec::unbounded()];
        let kept: Vec<u32> = table.feasible(&windows).iter().map(|a| a.id).collect();
        assert_eq!(kept, vec![1, 3]);
    }
}
