//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Fill markdown code fences with snippets cut from `#region Snippet:` blocks
#[derive(Parser, Debug)]
#[command(name = "snippetgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding both the source files and the documents
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Report out-of-date documents without writing them; exits non-zero if any
    #[arg(long)]
    pub check: bool,

    /// Configuration file [default: <ROOT>/.snippetgen.toml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source file extension to scan for regions (repeatable)
    #[arg(long = "source-ext", value_name = "EXT")]
    pub source_ext: Vec<String>,

    /// Document extension to rewrite (repeatable)
    #[arg(long = "doc-ext", value_name = "EXT")]
    pub doc_ext: Vec<String>,

    /// Directory name to skip (repeatable)
    #[arg(long, value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Enable debug output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level when `RUST_LOG` is unset.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}
