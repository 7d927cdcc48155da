// src/input.rs
//! Edge-list file reading.
//!
//! Strips what the core does not understand (leading header lines, comments,
//! blank lines) and hands the rest to the edge parser with file line numbers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::edges::{self, Edge};
use crate::error::{RankError, Result};
use crate::graph::GraphIndex;

/// The `[input]` table of `linkrank.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Lines dropped unconditionally from the top of the file.
    #[serde(default)]
    pub skip_lines: usize,
    /// Lines starting with this prefix are ignored. Empty disables the check.
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_lines: 0,
            comment_prefix: default_comment_prefix(),
        }
    }
}

fn default_comment_prefix() -> String { "#".to_string() }

impl InputConfig {
    fn is_data(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return false;
        }
        self.comment_prefix.is_empty() || !trimmed.starts_with(&self.comment_prefix)
    }
}

/// Reads and indexes the edge list at `path`.
///
/// # Errors
/// Returns [`RankError::Io`] if the file cannot be read and
/// [`RankError::Parse`] for the first malformed data line.
pub fn load_graph(path: &Path, config: &InputConfig) -> Result<GraphIndex> {
    let file = File::open(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let graph = read_graph(BufReader::new(file), config).map_err(|e| match e {
        RankError::Io { source, .. } => RankError::Io {
            source,
            path: path.to_path_buf(),
        },
        other => other,
    })?;
    log::info!(
        "loaded {} edges over {} nodes ({} sources) from {}",
        graph.edge_count(),
        graph.node_count(),
        graph.n_pages(),
        path.display()
    );
    Ok(graph)
}

/// Indexes edges from any buffered reader.
///
/// # Errors
/// Same as [`load_graph`], with an unknown path on I/O failure.
pub fn read_graph<R: BufRead>(reader: R, config: &InputConfig) -> Result<GraphIndex> {
    GraphIndex::try_build(read_edges(reader, config))
}

/// Lazily yields edges from `reader`. Line numbers in errors are 1-based
/// positions in the underlying input, header and comments included.
pub fn read_edges<'c, R: BufRead + 'c>(
    reader: R,
    config: &'c InputConfig,
) -> impl Iterator<Item = Result<Edge>> + 'c {
    reader
        .lines()
        .enumerate()
        .skip(config.skip_lines)
        .filter_map(move |(idx, line)| match line {
            Ok(line) if config.is_data(&line) => Some(edges::parse_record(idx + 1, &line)),
            Ok(_) => None,
            Err(e) => Some(Err(RankError::from(e))),
        })
}
