// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;
use crate::rank::RankRun;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("malformed edge record at line {line}: expected `<source> <target>`, got {record:?}")]
    Parse { line: usize, record: String },

    #[error("graph has no source nodes; nothing to rank")]
    EmptyGraph,

    #[error("node {node:?} has inbound contributor {contributor:?} with no outbound edges")]
    DegreeZero { node: NodeId, contributor: NodeId },

    #[error("ranks did not converge after {iterations} iterations (last distance {last_distance:e})")]
    NonConvergence {
        iterations: usize,
        last_distance: f64,
        partial: Box<RankRun>,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl RankError {
    /// True for errors caused by the input data or parameters rather than the environment.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. }
                | Self::EmptyGraph
                | Self::DegreeZero { .. }
                | Self::InvalidParameter(_)
                | Self::Config { .. }
        )
    }

    /// Best-effort ranks left behind by a run that hit its iteration ceiling.
    #[must_use]
    pub fn partial_run(&self) -> Option<&RankRun> {
        match self {
            Self::NonConvergence { partial, .. } => Some(partial),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
