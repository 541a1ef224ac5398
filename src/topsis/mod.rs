//! TOPSIS (Technique for Order of Preference by Similarity to Ideal Solution).
//!
//! A distance-to-ideal method: criterion columns are vector-normalized
//! and weighted, the per-direction ideal and anti-ideal points are read
//! off the normalized matrix, and each alternative is scored by the
//! relative closeness `d- / (d+ + d-)` between its Euclidean distances
//! to the two points.
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making"
//! - Behzadian et al. (2012), "A state-of-the-art survey of TOPSIS applications"

mod config;
mod scorer;

pub use config::TopsisConfig;
pub use scorer::{TopsisOutcome, TopsisScorer};
