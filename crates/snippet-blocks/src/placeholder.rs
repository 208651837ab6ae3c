//! Placeholder discovery in markdown documents.
//!
//! A placeholder is a fenced code block whose info string names a snippet:
//!
//! ````text
//! ```csharp Snippet:Hello
//! body replaced on every run
//! ```
//! ````
//!
//! The body ends at the first line opening with a backtick run at least as
//! long as the opening fence. A bare run closes the placeholder; a run
//! followed by an info string starts another block and is an error.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// Opening fence line carrying a `Snippet:` key.
static OPEN_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?P<indent>[ \t]*)(?P<fence>`{3,})(?P<lang>[^\s`]*)[ \t]*(?P<name>Snippet:[^\s`]+)[^\n]*(?:\n|\z)")
        .expect("Invalid placeholder regex")
});

/// A snippet placeholder found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Full snippet key, including the `Snippet:` prefix.
    pub name: String,
    /// Language token of the fence, if any.
    pub language: Option<String>,
    /// Whitespace preceding the opening fence.
    pub indent: String,
    /// Whether the opening fence line ends in `\r\n`.
    pub crlf: bool,
    /// Byte range of the opening fence's backticks.
    pub open_fence: Range<usize>,
    /// Byte range of the closing fence's backticks.
    pub close_fence: Range<usize>,
    /// Byte range of the body between the fence lines.
    pub body: Range<usize>,
    /// 1-based line of the opening fence.
    pub line: usize,
}

impl Placeholder {
    fn from_captures(content: &str, caps: &Captures<'_>) -> Result<Self> {
        let header = caps.get_match();
        let fence = caps.name("fence").map_or(0..0, |m| m.range());
        let name = caps["name"].to_string();
        let line = content[..header.start()].matches('\n').count() + 1;
        let body_start = header.end();

        let mut line_start = body_start;
        for (offset, text) in content[body_start..].split_inclusive('\n').enumerate() {
            let trimmed = text.trim_start_matches([' ', '\t']);
            let run = trimmed.len() - trimmed.trim_start_matches('`').len();

            if run >= fence.len() {
                if !trimmed[run..].trim().is_empty() {
                    return Err(Error::InterruptedPlaceholder {
                        name,
                        line,
                        fence_line: line + 1 + offset,
                    });
                }

                let close_start = line_start + (text.len() - trimmed.len());
                return Ok(Self {
                    name,
                    language: Some(&caps["lang"]).filter(|lang| !lang.is_empty()).map(str::to_string),
                    indent: caps["indent"].to_string(),
                    crlf: header.as_str().ends_with("\r\n"),
                    open_fence: fence,
                    close_fence: close_start..close_start + run,
                    body: body_start..line_start,
                    line,
                });
            }
            line_start += text.len();
        }

        Err(Error::UnclosedPlaceholder { name, line })
    }

    /// Backtick count of the opening fence.
    pub fn fence_len(&self) -> usize {
        self.open_fence.len()
    }

    /// Line terminator used when inserting text into this placeholder.
    pub fn line_ending(&self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }
}

/// Finds every placeholder in `content`, in document order.
///
/// # Errors
///
/// [`Error::UnclosedPlaceholder`] when a placeholder runs to the end of the
/// document and [`Error::InterruptedPlaceholder`] when another code block
/// opens before it is closed.
///
/// # Example
/// ```
/// use snippet_blocks::placeholder::find_placeholders;
///
/// let doc = "Intro\n\n```csharp Snippet:Hello\nold\n```\n";
/// let found = find_placeholders(doc).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Snippet:Hello");
/// assert_eq!(&doc[found[0].body.clone()], "old\n");
/// ```
pub fn find_placeholders(content: &str) -> Result<Vec<Placeholder>> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = OPEN_FENCE_REGEX.captures_at(content, cursor) {
        let placeholder = Placeholder::from_captures(content, &caps)?;
        cursor = placeholder.close_fence.end;
        found.push(placeholder);
    }

    Ok(found)
}

/// Length of the longest backtick run opening any line of `text`, counting
/// only runs long enough to be read as a fence.
pub(crate) fn longest_fence_run(text: &str) -> usize {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start_matches([' ', '\t']);
            trimmed.len() - trimmed.trim_start_matches('`').len()
        })
        .filter(|&run| run >= 3)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_is_optional() {
        let found = find_placeholders("```Snippet:Bare\n```\n").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Snippet:Bare");
        assert_eq!(found[0].language, None);
    }

    #[test]
    fn test_plain_code_block_is_not_a_placeholder() {
        let doc = "```rust\nfn main() {}\n```\n";
        assert!(find_placeholders(doc).unwrap().is_empty());
    }

    #[test]
    fn test_indented_fence_records_indent() {
        let doc = "- item\n\n   ```cs Snippet:Nested\n   old\n   ```\n";
        let found = find_placeholders(doc).unwrap();
        assert_eq!(found[0].indent, "   ");
        assert_eq!(found[0].language.as_deref(), Some("cs"));
        assert_eq!(found[0].line, 3);
    }

    #[test]
    fn test_crlf_detected() {
        let found = find_placeholders("```cs Snippet:A\r\nold\r\n```\r\n").unwrap();
        assert!(found[0].crlf);
        assert_eq!(found[0].line_ending(), "\r\n");
    }

    #[test]
    fn test_prose_mention_is_ignored() {
        assert!(find_placeholders("See Snippet:Hello for details.\n").unwrap().is_empty());
    }

    #[test]
    fn test_longer_fence_keeps_shorter_runs_in_body() {
        let doc = "````cs Snippet:A\n```\ninner\n```\n````\n";
        let found = find_placeholders(doc).unwrap();
        assert_eq!(found[0].fence_len(), 4);
        assert_eq!(&doc[found[0].body.clone()], "```\ninner\n```\n");
        assert_eq!(&doc[found[0].close_fence.clone()], "````");
    }

    #[test]
    fn test_missing_closing_fence_is_an_error() {
        let err = find_placeholders("text\n```cs Snippet:A\nbody\n").unwrap_err();
        assert_eq!(
            err,
            Error::UnclosedPlaceholder {
                name: "Snippet:A".into(),
                line: 2
            }
        );
    }

    #[test]
    fn test_fence_at_end_of_input_is_unclosed() {
        let err = find_placeholders("```cs Snippet:A").unwrap_err();
        assert!(matches!(err, Error::UnclosedPlaceholder { line: 1, .. }));
    }

    #[test]
    fn test_longest_fence_run_ignores_short_runs() {
        assert_eq!(longest_fence_run("a\n``inline``\n"), 0);
        assert_eq!(longest_fence_run("```\n  `````md\n"), 5);
    }
}
