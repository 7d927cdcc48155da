// src/rank/mod.rs
pub mod config;
pub mod convergence;
pub mod engine;
pub mod observer;
pub mod ranker;
pub mod vector;

pub use config::RankConfig;
pub use convergence::ConvergenceTrace;
pub use engine::{RankEngine, RankRun};
pub use observer::{IterationEvent, RankObserver};
pub use ranker::Ranker;
pub use vector::RankVector;

use crate::edges;
use crate::error::Result;
use crate::graph::{GraphIndex, NodeId};

/// Full pipeline over raw records: parse, index, iterate, sort.
///
/// # Errors
/// Any [`crate::RankError`] raised along the way; the first one aborts the run.
pub fn rank_records<I>(records: I, config: RankConfig) -> Result<Vec<(NodeId, f64)>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let graph = GraphIndex::try_build(edges::parse_records(records))?;
    let run = RankEngine::new(&graph, config)?.run()?;
    Ok(Ranker::rank(&run.ranks))
}
