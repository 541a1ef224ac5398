//! Pairwise Spearman rank correlation between method rankings.

use super::Method;
use crate::table::Ranking;

/// Minimum number of common identifiers two rankings must share before
/// a Spearman coefficient is computed. Below this the pair is recorded
/// as [`Correlation::Insufficient`].
pub const MIN_COMMON_FOR_CORRELATION: usize = 6;

/// One entry of the correlation matrix.
///
/// `Insufficient` means the two rankings share too few identifiers to
/// compare — it must not be conflated with a correlation of zero, even
/// though it renders as 0 in the numeric matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Correlation {
    /// Spearman's rho over the common identifiers, in `[-1, 1]`.
    Rho(f64),
    /// Fewer than [`MIN_COMMON_FOR_CORRELATION`] common identifiers.
    Insufficient,
}

impl Correlation {
    /// Numeric rendering: `Insufficient` maps to 0.
    pub fn as_f64(self) -> f64 {
        match self {
            Correlation::Rho(rho) => rho,
            Correlation::Insufficient => 0.0,
        }
    }
}

/// Square rank-correlation matrix over a set of usable methods.
///
/// Diagonal entries are always `Rho(1.0)`. The matrix is symmetric:
/// Spearman's rho is symmetric in its inputs and both triangles are
/// filled from the same computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationMatrix {
    methods: Vec<Method>,
    entries: Vec<Correlation>,
}

impl CorrelationMatrix {
    /// Computes the matrix over the given `(method, ranking)` pairs.
    pub fn compute(rankings: &[(Method, Ranking)]) -> Self {
        let n = rankings.len();
        let mut entries = vec![Correlation::Rho(1.0); n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let entry = correlate(&rankings[i].1, &rankings[j].1);
                entries[i * n + j] = entry;
                entries[j * n + i] = entry;
            }
        }

        Self {
            methods: rankings.iter().map(|(m, _)| *m).collect(),
            entries,
        }
    }

    /// Methods along both axes, in orchestrator order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Entry at positional indices `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Correlation {
        self.entries[i * self.methods.len() + j]
    }

    /// Entry for a method pair, if both methods are present.
    pub fn between(&self, a: Method, b: Method) -> Option<Correlation> {
        let i = self.methods.iter().position(|&m| m == a)?;
        let j = self.methods.iter().position(|&m| m == b)?;
        Some(self.get(i, j))
    }

    /// The matrix rendered as plain numbers, `Insufficient` as 0.
    pub fn to_values(&self) -> Vec<Vec<f64>> {
        let n = self.methods.len();
        (0..n)
            .map(|i| (0..n).map(|j| self.get(i, j).as_f64()).collect())
            .collect()
    }
}

/// Correlates two rankings over their common identifiers.
fn correlate(a: &Ranking, b: &Ranking) -> Correlation {
    // 0-based position of every id within each ranking.
    let common: Vec<(usize, usize)> = a
        .iter()
        .enumerate()
        .filter_map(|(pos_a, id)| {
            b.iter()
                .position(|other| other == id)
                .map(|pos_b| (pos_a, pos_b))
        })
        .collect();

    if common.len() < MIN_COMMON_FOR_CORRELATION {
        return Correlation::Insufficient;
    }

    let xs: Vec<usize> = common.iter().map(|&(x, _)| x).collect();
    let ys: Vec<usize> = common.iter().map(|&(_, y)| y).collect();
    Correlation::Rho(spearman(&xs, &ys))
}

/// Spearman's rho for two sequences of distinct values.
///
/// Positions within a ranking are distinct, so after re-ranking the
/// common subset the tie-free closed form `1 - 6*sum(d^2) / (n(n^2-1))`
/// applies.
fn spearman(xs: &[usize], ys: &[usize]) -> f64 {
    let n = xs.len();
    let rank_x = ordinal_ranks(xs);
    let rank_y = ordinal_ranks(ys);

    let d_squared: f64 = rank_x
        .iter()
        .zip(&rank_y)
        .map(|(&rx, &ry)| {
            let d = rx as f64 - ry as f64;
            d * d
        })
        .sum();

    let n = n as f64;
    1.0 - 6.0 * d_squared / (n * (n * n - 1.0))
}

/// Ordinal rank (0-based) of each element within its sequence.
fn ordinal_ranks(values: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| values[i]);
    let mut ranks = vec![0; values.len()];
    for (rank, &i) in order.iter().enumerate() {
        ranks[i] = rank;
    }
    ranks
}
