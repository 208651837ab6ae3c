//! Error types for snippet-core

use std::path::PathBuf;

/// Result type for snippet-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a snippet run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A placeholder names a snippet defined nowhere under the root
    #[error("Snippet '{name}' not found in directory '{root}'")]
    SnippetNotFound { name: String, root: PathBuf },

    /// A placeholder names a snippet defined more than once under the root
    #[error(
        "Multiple snippets with the name '{name}' defined in '{root}': {}",
        .locations.join(", ")
    )]
    DuplicateSnippetName {
        name: String,
        root: PathBuf,
        locations: Vec<String>,
    },

    /// A source file has an unmatched `#region` or `#endregion`
    #[error("Malformed regions in {path}: {source}")]
    MalformedRegion {
        path: PathBuf,
        #[source]
        source: snippet_blocks::Error,
    },

    /// A document has a placeholder without a usable closing fence
    #[error("Malformed placeholder in {path}: {source}")]
    MalformedPlaceholder {
        path: PathBuf,
        #[source]
        source: snippet_blocks::Error,
    },

    /// Filesystem error from snippet-fs
    #[error(transparent)]
    Fs(#[from] snippet_fs::Error),
}
