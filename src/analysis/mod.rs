//! Cross-method analysis: orchestration, rank correlation, consensus.
//!
//! The orchestrator fans the table out to all five scoring methods
//! under one shared default configuration, isolates per-method failures,
//! then hands the usable rankings to the correlation analyzer (pairwise
//! Spearman matrix) and the consensus aggregator (average-rank fusion
//! with a missing-rank penalty).

mod consensus;
mod correlation;
mod orchestrator;

pub use consensus::{aggregate_consensus, ConsensusEntry};
pub use correlation::{Correlation, CorrelationMatrix, MIN_COMMON_FOR_CORRELATION};
pub use orchestrator::{perform_analysis, AnalysisConfig, AnalysisReport, MIN_USABLE_RANKING};

use std::fmt;

/// The five scoring methods, in their fixed invocation order.
///
/// This order is the deterministic key order used for the rankings
/// mapping, the correlation matrix axes, and the per-method rank lists
/// in consensus entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Topsis,
    Rsm,
    UtaStar,
    Ahp,
    SpCs,
}

impl Method {
    /// All methods in invocation order.
    pub const ALL: [Method; 5] = [
        Method::Topsis,
        Method::Rsm,
        Method::UtaStar,
        Method::Ahp,
        Method::SpCs,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Method::Topsis => "TOPSIS",
            Method::Rsm => "RSM",
            Method::UtaStar => "UTA",
            Method::Ahp => "AHP",
            Method::SpCs => "SP-CS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
