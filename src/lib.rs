//! `linkrank`: damped power-iteration PageRank over edge lists.
//!
//! Pipeline: records → [`edges`] → [`GraphIndex`] → [`RankEngine`] → [`Ranker`].
//!
//! Invariants:
//! - **Rank universe**: only nodes with at least one outbound edge are ranked.
//!   Target-only nodes receive no score.
//! - **No renormalization**: ranks are not rescaled between iterations.
//! - **Snapshots**: every iteration reads only the previous snapshot and
//!   produces a new one.

pub mod cli;
pub mod config;
pub mod edges;
pub mod error;
pub mod exit;
pub mod graph;
pub mod input;
pub mod rank;
pub mod report;

pub use edges::Edge;
pub use error::{RankError, Result};
pub use graph::{GraphIndex, NodeId};
pub use rank::{
    rank_records, ConvergenceTrace, IterationEvent, RankConfig, RankEngine, RankObserver,
    RankRun, RankVector, Ranker,
};
