// src/bin/linkrank.rs
use clap::Parser;
use colored::Colorize;
use linkrank_core::cli::{handlers, Cli};
use linkrank_core::exit::LinkRankExit;

fn main() -> LinkRankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match handlers::handle_rank(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LinkRankExit::Error
        }
    }
}

fn init_logging(verbose: bool) {
    // Per-iteration records are debug; verbose progress lines come from the observer.
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
