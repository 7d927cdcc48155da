use clap::Parser;
use std::path::PathBuf;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser)]
#[command(name = "linkrank", version, about = "Rank nodes of an edge-list graph by PageRank")]
pub struct Cli {
    /// Edge list: one `<source> <target>` pair per line
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Damping factor in [0,1]
    #[arg(long, short)]
    pub beta: Option<f64>,
    /// Plateau threshold on the change between successive distances
    #[arg(long, short)]
    pub epsilon: Option<f64>,
    /// Give up after this many iterations
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Drop this many lines from the top of the file
    #[arg(long)]
    pub skip_lines: Option<usize>,
    /// Ignore lines starting with this prefix
    #[arg(long)]
    pub comment_prefix: Option<String>,
    /// Only print the N highest-ranked nodes
    #[arg(long, short, value_name = "N")]
    pub top: Option<usize>,
    /// Emit a JSON report instead of a table
    #[arg(long)]
    pub json: bool,
    /// Update nodes in parallel within each iteration
    #[arg(long)]
    pub parallel: bool,
    /// Config file (defaults to ./linkrank.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print per-iteration progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
