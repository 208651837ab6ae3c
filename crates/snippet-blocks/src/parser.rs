//! Region directive parsing for source files.
//!
//! Recognizes `#region <label>` / `#endregion` lines, either bare (C#) or
//! behind a `//` comment leader, and pairs them with a stack:
//!
//! ```text
//! #region Snippet:Outer
//!     // #region Snippet:Inner
//!     inner body
//!     // #endregion
//! #endregion
//! ```

use crate::error::{Error, Result};

/// Label prefix marking a region as a documentation snippet.
pub const SNIPPET_PREFIX: &str = "Snippet:";

const BEGIN_KEYWORD: &str = "#region";
const END_KEYWORD: &str = "#endregion";

/// A matched begin/end directive pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Label text following `#region`, trimmed.
    pub label: String,
    /// Text strictly between the begin directive's line and the end directive's line.
    pub content: String,
    /// 1-based line of the `#region` directive.
    pub start_line: usize,
    /// 1-based line of the `#endregion` directive.
    pub end_line: usize,
}

impl Region {
    /// Whether the label carries the snippet prefix.
    pub fn is_snippet(&self) -> bool {
        self.label.starts_with(SNIPPET_PREFIX)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Directive<'a> {
    Begin(&'a str),
    End,
}

/// An open `#region` awaiting its `#endregion`.
struct OpenRegion<'a> {
    label: &'a str,
    body_start: usize,
    line: usize,
}

/// Parses every region in `content`, at any nesting depth.
///
/// Regions are returned in the order their `#endregion` is reached, so an
/// inner region precedes the region enclosing it.
///
/// # Errors
///
/// Returns [`Error::UnbalancedRegion`] for an `#endregion` with nothing open
/// and [`Error::UnclosedRegion`] for a `#region` still open at end of input.
///
/// # Example
/// ```
/// use snippet_blocks::parser::parse_regions;
///
/// let source = "#region Snippet:Greet\nhello();\n#endregion\n";
/// let regions = parse_regions(source).unwrap();
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].label, "Snippet:Greet");
/// assert_eq!(regions[0].content, "hello();\n");
/// ```
pub fn parse_regions(content: &str) -> Result<Vec<Region>> {
    let mut open: Vec<OpenRegion<'_>> = Vec::new();
    let mut regions = Vec::new();
    let mut offset = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let line_number = index + 1;
        let line_start = offset;
        offset += line.len();

        match directive(line) {
            Some(Directive::Begin(label)) => open.push(OpenRegion {
                label,
                body_start: offset,
                line: line_number,
            }),
            Some(Directive::End) => {
                let begin = open
                    .pop()
                    .ok_or(Error::UnbalancedRegion { line: line_number })?;
                regions.push(Region {
                    label: begin.label.to_string(),
                    content: content[begin.body_start..line_start].to_string(),
                    start_line: begin.line,
                    end_line: line_number,
                });
            }
            None => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(Error::UnclosedRegion {
            label: unclosed.label.to_string(),
            line: unclosed.line,
        });
    }

    Ok(regions)
}

/// Parses `content` and keeps only regions labelled with [`SNIPPET_PREFIX`].
pub fn snippet_regions(content: &str) -> Result<Vec<Region>> {
    let mut regions = parse_regions(content)?;
    regions.retain(Region::is_snippet);
    Ok(regions)
}

fn directive(line: &str) -> Option<Directive<'_>> {
    let text = line.trim_start();
    // `//`, `///` and `//!` leaders all count
    let text = match text.strip_prefix("//") {
        Some(rest) => rest.trim_start_matches(['/', '!']).trim_start(),
        None => text,
    };

    if let Some(rest) = keyword(text, BEGIN_KEYWORD) {
        return Some(Directive::Begin(rest.trim()));
    }
    keyword(text, END_KEYWORD).map(|_| Directive::End)
}

/// Strips `keyword` when it stands alone as a word at the start of `text`.
fn keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = text.strip_prefix(keyword)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}
