//! Snippet catalog and documentation rewriting for snippetgen.
//!
//! Ties the text algorithms in `snippet-blocks` to a directory tree:
//!
//! 1. [`SnippetCatalog`] collects every `Snippet:` region from the source
//!    files under a root, built at most once per run through [`LazyCatalog`].
//! 2. [`DirectoryProcessor`] rewrites placeholders in every document under
//!    the same root, resolving each against the catalog and persisting only
//!    documents whose text changed.

pub mod catalog;
pub mod config;
pub mod error;
pub mod processor;
pub mod snippet;

pub use catalog::{LazyCatalog, SnippetCatalog, extract_snippets};
pub use config::SnippetConfig;
pub use error::{Error, Result};
pub use processor::{DirectoryProcessor, DocumentReport, DocumentStatus, ProcessMode, ProcessReport};
pub use snippet::Snippet;
