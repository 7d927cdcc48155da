// src/edges.rs
//! Edge-record parsing.
//!
//! A record is one line of an edge list: `<source> <target> [ignored...]`,
//! whitespace separated. Identifiers are kept verbatim as opaque tokens.

use crate::error::{RankError, Result};
use crate::graph::NodeId;

/// A directed edge `from -> to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    #[must_use]
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Parses a single record. `line` is only used for error reporting.
///
/// # Errors
/// Returns [`RankError::Parse`] when the record has fewer than two tokens.
pub fn parse_record(line: usize, record: &str) -> Result<Edge> {
    let mut tokens = record.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(from), Some(to)) => Ok(Edge::new(from, to)),
        _ => Err(RankError::Parse {
            line,
            record: record.to_string(),
        }),
    }
}

/// Lazily parses a sequence of records, numbering them from 1.
pub fn parse_records<I>(records: I) -> impl Iterator<Item = Result<Edge>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| parse_record(idx + 1, record.as_ref()))
}
