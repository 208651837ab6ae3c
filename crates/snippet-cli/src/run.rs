//! The processing command: resolve configuration, rewrite, report.

use colored::Colorize;

use snippet_core::{DirectoryProcessor, DocumentStatus, ProcessMode, ProcessReport, SnippetConfig};
use snippet_fs::{NormalizedPath, io};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Process the tree named on the command line and print a summary.
pub fn run_process(cli: &Cli) -> Result<()> {
    let root = io::canonical_dir(&cli.root)?;
    let config = resolve_config(cli, &root)?;
    let mode = if cli.check {
        ProcessMode::Check
    } else {
        ProcessMode::Write
    };

    tracing::debug!(root = %root, ?config, ?mode, "Starting run");

    let report = DirectoryProcessor::new(root, config).process(mode)?;
    print_report(&report);

    match report.stale_count() {
        0 => Ok(()),
        count => Err(CliError::StaleDocuments { count }),
    }
}

/// Config file (explicit or discovered) overlaid with command-line lists.
fn resolve_config(cli: &Cli, root: &NormalizedPath) -> Result<SnippetConfig> {
    let mut config = match &cli.config {
        Some(path) => SnippetConfig::load(&NormalizedPath::new(path))?,
        None => SnippetConfig::discover(root)?,
    };

    if !cli.source_ext.is_empty() {
        config.source_extensions = cli.source_ext.clone();
    }
    if !cli.doc_ext.is_empty() {
        config.document_extensions = cli.doc_ext.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude = cli.exclude.clone();
    }

    Ok(config)
}

fn print_report(report: &ProcessReport) {
    for doc in &report.documents {
        let path = doc.path.relative_to(&report.root).unwrap_or(doc.path.as_str());
        match doc.status {
            DocumentStatus::NoPlaceholders => {}
            DocumentStatus::UpToDate => {
                println!("   {} {}", "ok".dimmed(), path);
            }
            DocumentStatus::Updated => {
                println!("   {} {} ({} snippet(s))", "updated".green(), path.cyan(), doc.replaced);
            }
            DocumentStatus::Stale => {
                println!("   {} {}", "stale".yellow().bold(), path.cyan());
                if let Some(diff) = &doc.diff {
                    print!("{}", diff);
                }
            }
        }
    }

    let verb = match report.mode {
        ProcessMode::Write => "updated",
        ProcessMode::Check => "out of date",
    };
    let changed = match report.mode {
        ProcessMode::Write => report.updated_count(),
        ProcessMode::Check => report.stale_count(),
    };

    println!(
        "{} {} document(s) scanned, {} {}, {} placeholder(s) resolved",
        "=>".blue().bold(),
        report.documents.len(),
        changed,
        verb,
        report.replaced_count()
    );
}
