//! Multi-criteria decision analysis toolkit with cross-method consensus.
//!
//! Ranks a fixed set of alternatives — each described by a vector of
//! numeric criterion values — using several independent MCDA methods,
//! then cross-validates the methods against each other and fuses their
//! outputs into one consensus ranking:
//!
//! - **AHP**: Pairwise-comparison scoring with eigenvector-approximation
//!   criterion weights and a consistency-ratio diagnostic.
//! - **TOPSIS**: Distance-to-ideal scoring via relative closeness
//!   between the ideal and anti-ideal points.
//! - **RSM**: Satisficing-region scoring — feasibility windows carve
//!   out the region, distance to its ideal corner orders it.
//! - **UTA\***: Utility-additive scoring with piecewise-linear marginal
//!   utility functions on per-criterion segment grids.
//! - **SP-CS**: Constrained-subset scoring by Pareto dominance over a
//!   small caller-chosen criterion subset.
//! - **Analysis**: An orchestrator that runs all five under one shared
//!   configuration with per-method failure isolation, a pairwise
//!   Spearman rank-correlation matrix, and an average-rank consensus
//!   aggregator with an explicit missing-rank penalty.
//!
//! # Architecture
//!
//! The crate is a pure engine: it consumes an [`table::AlternativeTable`]
//! plus per-method configuration and returns rankings, a correlation
//! matrix, and a consensus list. Data loading, ratio-string parsing and
//! display-name resolution belong to the caller. All operations are
//! synchronous and side-effect-free; with the `parallel` feature the
//! orchestrator fans the five methods out on rayon, joining before any
//! cross-method stage runs.

pub mod ahp;
pub mod analysis;
pub mod error;
pub mod rsm;
pub mod spcs;
pub mod table;
pub mod topsis;
pub mod uta;
