//! Region extraction, snippet formatting and placeholder rewriting.
//!
//! Everything in this crate operates on text already in memory; reading
//! source trees and persisting documents is left to `snippet-core`.
//!
//! # Source regions
//!
//! Snippets are defined in source files with region directives, optionally
//! behind a `//` comment leader for languages without `#region`:
//!
//! ```text
//! #region Snippet:Hello
//! Console.WriteLine("Hello");
//! #endregion
//! ```
//!
//! Regions nest; only those whose label starts with [`SNIPPET_PREFIX`] are
//! surfaced as snippets.
//!
//! # Document placeholders
//!
//! Documents reference a snippet with a fenced code block whose info string
//! carries the full label. The body between the fences is replaced on every
//! run and the fences themselves are left untouched:
//!
//! ````text
//! ```csharp Snippet:Hello
//! Console.WriteLine("Hello");
//! ```
//! ````

pub mod error;
pub mod format;
pub mod parser;
pub mod placeholder;
pub mod writer;

pub use error::{Error, Result};
pub use format::format_snippet;
pub use parser::{Region, SNIPPET_PREFIX, parse_regions, snippet_regions};
pub use placeholder::{Placeholder, find_placeholders};
pub use writer::{Rewrite, rewrite_placeholders};
