//! UTA* (utility additive method).
//!
//! A utility-additive method: every criterion gets a piecewise-linear
//! marginal utility function over its feasibility window, approximated
//! on a per-criterion breakpoint grid, and alternatives are ordered by
//! the weighted sum of their marginal utilities. With no preference
//! information the marginals follow a uniform equal-increment prior, so
//! the segment count acts as the resolution at which nearby alternatives
//! become indistinguishable.
//!
//! Unlike the other scorers this one fails loudly: an empty feasible
//! region and a non-positive segment count are distinct errors that the
//! caller must surface.
//!
//! # References
//!
//! - Jacquet-Lagreze & Siskos (1982), "Assessing a set of additive utility functions"
//! - Siskos, Grigoroudis & Matsatsinis (2005), "UTA methods"

mod config;
mod scorer;

pub use config::UtaConfig;
pub use scorer::{UtaOutcome, UtaScorer};
