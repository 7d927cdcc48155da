// src/report.rs
//! Terminal and JSON output for a finished run.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::graph::{GraphIndex, NodeId};
use crate::rank::RankRun;

#[derive(Debug, Serialize)]
pub struct RankedNode<'a> {
    pub node: &'a str,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub nodes: usize,
    pub edges: usize,
    pub iterations: usize,
    pub converged: bool,
    pub distances: &'a [f64],
    pub ranks: Vec<RankedNode<'a>>,
}

impl<'a> JsonReport<'a> {
    #[must_use]
    pub fn new(graph: &GraphIndex, run: &'a RankRun, ranked: &'a [(NodeId, f64)]) -> Self {
        Self {
            nodes: graph.n_pages(),
            edges: graph.edge_count(),
            iterations: run.iterations(),
            converged: run.converged,
            distances: run.trace.distances(),
            ranks: ranked
                .iter()
                .map(|(node, score)| RankedNode { node, score: *score })
                .collect(),
        }
    }
}

/// Writes the JSON report.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_json<W: Write>(
    out: &mut W,
    graph: &GraphIndex,
    run: &RankRun,
    ranked: &[(NodeId, f64)],
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::new(graph, run, ranked))?;
    writeln!(out)?;
    Ok(())
}

/// Writes the ranking as an aligned table.
///
/// # Errors
/// Returns error if the write fails.
pub fn write_table<W: Write>(out: &mut W, ranked: &[(NodeId, f64)]) -> io::Result<()> {
    let width = ranked
        .iter()
        .map(|(node, _)| node.len())
        .max()
        .unwrap_or(0)
        .max(4);
    writeln!(
        out,
        "{}",
        format!("{:>6}  {:<width$}  {}", "RANK", "NODE", "SCORE").bold()
    )?;
    for (pos, (node, score)) in ranked.iter().enumerate() {
        let padded = format!("{node:<width$}");
        writeln!(out, "{:>6}  {}  {score:.10}", pos + 1, padded.cyan())?;
    }
    Ok(())
}

/// One-line summary of the run.
#[must_use]
pub fn summary(graph: &GraphIndex, run: &RankRun) -> String {
    let status = if run.converged {
        "converged".green()
    } else {
        "NOT converged".yellow().bold()
    };
    format!(
        "{} nodes ranked ({} edges, {} total nodes), {} after {} iterations, last distance {:e}",
        graph.n_pages(),
        graph.edge_count(),
        graph.node_count(),
        status,
        run.iterations(),
        run.trace.last().unwrap_or(0.0)
    )
}
