//! SP-CS (set partitioning / constrained subset method).
//!
//! A constrained-subset method: feasibility is judged on a small,
//! caller-chosen subset of criteria (at most three, e.g. the highest
//! weighted ones), and the feasible alternatives are ordered by a
//! multidimensional dominance rule over that subset — dominance count
//! first, direction-oriented achievement sum to break ties.
//!
//! # References
//!
//! - Pareto dominance over selected objectives; see e.g. Ehrgott (2005),
//!   "Multicriteria Optimization"

mod config;
mod scorer;

pub use config::SpCsConfig;
pub use scorer::{SpCsOutcome, SpCsScorer};
