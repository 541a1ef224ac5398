//! RSM (reference set / satisficing region method).
//!
//! A satisficing method: the per-criterion windows carve out the
//! satisficing region, and alternatives inside it are ordered by their
//! distance to the region's ideal corner after direction-aware min-max
//! normalization. Criteria can be switched off with activity flags;
//! inactive criteria neither filter nor score.
//!
//! # References
//!
//! - Wierzbicki (1980), "The use of reference objectives in multiobjective optimization"
//! - Simon (1956), "Rational choice and the structure of the environment"

mod config;
mod scorer;

pub use config::RsmConfig;
pub use scorer::{RsmOutcome, RsmScorer};
