//! Error types for snippet-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that end the process with a non-zero status
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from snippet-core
    #[error(transparent)]
    Core(#[from] snippet_core::Error),

    /// Error from snippet-fs
    #[error(transparent)]
    Fs(#[from] snippet_fs::Error),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// `--check` found documents that a normal run would rewrite
    #[error("{count} document(s) out of date; run without --check to update")]
    StaleDocuments { count: usize },
}
