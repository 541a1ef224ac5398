//! Analytic Hierarchy Process (AHP).
//!
//! A pairwise-comparison method: criterion importance is expressed as a
//! matrix of importance ratios, criterion weights are derived by the
//! classical column-normalize-and-average eigenvector approximation, and
//! alternatives are compared pairwise per criterion the same way. The
//! consistency ratio of the comparison matrix is reported as a diagnostic
//! but never blocks scoring.
//!
//! # References
//!
//! - Saaty (1980), "The Analytic Hierarchy Process"
//! - Saaty (1987), "The analytic hierarchy process — what it is and how it is used"

mod config;
mod scorer;

pub use config::AhpConfig;
pub use scorer::{AhpOutcome, AhpScorer};
