//! Error types shared across the crate.
//!
//! The taxonomy keeps three outcomes distinguishable everywhere:
//! invalid configuration (caller bug), an infeasible region (valid
//! configuration that excludes every alternative), and an analysis that
//! cannot proceed because too few methods produced usable rankings.
//!
//! Scorers that historically signaled infeasibility with an empty list
//! (AHP, TOPSIS, RSM) still return `Ok` with an empty ranking; UTA and
//! SP-CS signal it as [`ScoreError::RegionTooNarrow`].

use thiserror::Error;

/// Failure of a single scoring method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Mismatched lengths, out-of-range indices, or malformed ratios.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The bounds exclude every alternative.
    #[error("region too narrow: bounds exclude every alternative")]
    RegionTooNarrow,

    /// A piecewise-linear segment count below 1 was supplied.
    #[error("segment count must be positive")]
    SegmentCountNotPositive,
}

/// Rejected [`AlternativeTable`](crate::table::AlternativeTable) input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table contains no alternatives.
    #[error("table contains no alternatives")]
    Empty,

    /// Rows carry an identifier but no criterion values.
    #[error("alternatives carry no criterion values")]
    NoCriteria,

    /// A row's width differs from the first row's.
    #[error("alternative {id}: expected {expected} criterion values, found {found}")]
    RaggedRow {
        id: u32,
        expected: usize,
        found: usize,
    },

    /// Two alternatives share an identifier.
    #[error("duplicate alternative id {id}")]
    DuplicateId { id: u32 },
}

/// Failure of the cross-method analysis as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Fewer than two methods produced rankings with at least two entries.
    #[error("not enough successful methods to perform comparison ({usable} usable)")]
    NotEnoughMethods { usable: usize },
}
