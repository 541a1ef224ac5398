//! Average-rank consensus across method rankings.

use super::Method;
use crate::table::Ranking;
use std::collections::BTreeSet;

/// Cross-method summary for one alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsensusEntry {
    /// Alternative identifier.
    pub id: u32,

    /// 1-based rank under each usable method, in method order. An
    /// alternative missing from a method's ranking gets the penalty
    /// rank (distinct identifier count + 1).
    pub ranks: Vec<(Method, usize)>,

    /// Arithmetic mean of `ranks`, penalties included.
    pub average_rank: f64,
}

/// Fuses the usable rankings into one consensus order.
///
/// The missing-rank penalty is `(distinct identifier count across all
/// rankings) + 1` — "ranked worse than everyone observed". It is
/// deliberately independent of how many methods ranked the alternative,
/// matching the reference behavior.
///
/// The result is sorted ascending by average rank; ties are broken by
/// ascending identifier, which keeps the output deterministic.
pub fn aggregate_consensus(rankings: &[(Method, Ranking)]) -> Vec<ConsensusEntry> {
    // BTreeSet gives the union a fixed ascending-id iteration order.
    let union: BTreeSet<u32> = rankings
        .iter()
        .flat_map(|(_, ranking)| ranking.iter().copied())
        .collect();
    let penalty = union.len() + 1;

    let mut entries: Vec<ConsensusEntry> = union
        .into_iter()
        .map(|id| {
            let ranks: Vec<(Method, usize)> = rankings
                .iter()
                .map(|(method, ranking)| {
                    let rank = ranking
                        .iter()
                        .position(|&r| r == id)
                        .map(|pos| pos + 1)
                        .unwrap_or(penalty);
                    (*method, rank)
                })
                .collect();
            let total: usize = ranks.iter().map(|&(_, r)| r).sum();
            ConsensusEntry {
                id,
                average_rank: total as f64 / ranks.len() as f64,
                ranks,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        a.average_rank
            .partial_cmp(&b.average_rank)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    entries
}
