//! The snippet value extracted from a source region

use snippet_blocks::{Region, format_snippet};
use snippet_fs::NormalizedPath;

/// A named region lifted out of a source file.
///
/// Immutable once built; the catalog hands out shared references for the
/// rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Full region label, `Snippet:` prefix included.
    pub name: String,
    /// Raw region body with its original indentation and blank lines.
    pub text: String,
    /// Source file the region came from.
    pub path: NormalizedPath,
    /// 1-based line of the `#region` directive.
    pub line: usize,
}

impl Snippet {
    pub fn new(name: impl Into<String>, text: impl Into<String>, path: impl Into<NormalizedPath>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            path: path.into(),
            line: 1,
        }
    }

    pub(crate) fn from_region(region: Region, path: &NormalizedPath) -> Self {
        Self {
            name: region.label,
            text: region.content,
            path: path.clone(),
            line: region.start_line,
        }
    }

    /// The body de-indented and trimmed for documentation.
    pub fn formatted(&self) -> String {
        format_snippet(&self.text)
    }

    /// `path:line` of the defining directive.
    pub fn location(&self) -> String {
        format!("{}:{}", self.path, self.line)
    }
}
