//! snippetgen CLI
//!
//! Keeps documentation code samples in sync with compilable source.

mod cli;
mod error;
mod logging;
mod run;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> Result<()> {
    logging::init(cli.log_level())?;
    tracing::debug!(?cli, "Parsed arguments");
    run::run_process(cli)
}
