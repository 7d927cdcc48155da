// src/cli/handlers.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::Cli;
use crate::config::Config;
use crate::error::RankError;
use crate::exit::LinkRankExit;
use crate::graph::GraphIndex;
use crate::input;
use crate::rank::{IterationEvent, RankEngine, RankRun, Ranker};
use crate::report;

/// Folds command-line overrides into the loaded config.
///
/// # Errors
/// Returns error if the config file cannot be loaded or the result is invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(beta) = cli.beta {
        config.rank.beta = beta;
    }
    if let Some(epsilon) = cli.epsilon {
        config.rank.epsilon = epsilon;
    }
    if let Some(max) = cli.max_iterations {
        config.rank.max_iterations = max;
    }
    if cli.parallel {
        config.rank.parallel = true;
    }
    if let Some(skip) = cli.skip_lines {
        config.input.skip_lines = skip;
    }
    if let Some(prefix) = &cli.comment_prefix {
        config.input.comment_prefix.clone_from(prefix);
    }
    config.rank.validate()?;
    Ok(config)
}

/// Handles a ranking run end to end.
///
/// # Errors
/// Returns error on I/O failures writing the report. Ranking failures are
/// reported and mapped to an exit code instead.
pub fn handle_rank(cli: &Cli) -> Result<LinkRankExit> {
    let config = match resolve_config(cli) {
        Ok(config) => config,
        Err(e) => return Ok(report_failure(&e)),
    };

    let graph = match input::load_graph(&cli.file, &config.input) {
        Ok(graph) => graph,
        Err(e) => return Ok(report_rank_error(&e)),
    };

    let engine = match RankEngine::new(&graph, config.rank) {
        Ok(engine) => engine,
        Err(e) => return Ok(report_rank_error(&e)),
    };

    let verbose = cli.verbose;
    let mut progress = |event: &IterationEvent| {
        if verbose {
            eprintln!("Iteration: {} loss: {}", event.iteration, event.distance);
        }
    };

    match engine.run_with(&mut progress) {
        Ok(run) => {
            emit(cli, &graph, &run)?;
            Ok(LinkRankExit::Success)
        }
        Err(RankError::NonConvergence { partial, .. }) => {
            eprintln!(
                "{} iteration limit reached; printing best-effort ranks",
                "warning:".yellow().bold()
            );
            emit(cli, &graph, &partial)?;
            Ok(LinkRankExit::NotConverged)
        }
        Err(e) => Ok(report_rank_error(&e)),
    }
}

fn emit(cli: &Cli, graph: &GraphIndex, run: &RankRun) -> Result<()> {
    let ranked = match cli.top {
        Some(k) => Ranker::top(&run.ranks, k),
        None => Ranker::rank(&run.ranks),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        report::write_json(&mut out, graph, run, &ranked)?;
    } else {
        report::write_table(&mut out, &ranked).context("writing rank table")?;
        eprintln!("{}", report::summary(graph, run));
    }
    out.flush()?;
    Ok(())
}

fn report_rank_error(e: &RankError) -> LinkRankExit {
    eprintln!("{} {e}", "error:".red().bold());
    LinkRankExit::from(e)
}

fn report_failure(e: &anyhow::Error) -> LinkRankExit {
    eprintln!("{} {e}", "error:".red().bold());
    match e.downcast_ref::<RankError>() {
        Some(rank) => LinkRankExit::from(rank),
        None => LinkRankExit::Error,
    }
}
