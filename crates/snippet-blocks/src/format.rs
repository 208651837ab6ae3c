//! Snippet normalization for documentation output.

/// Normalizes a raw region body into documentation-ready text.
///
/// - Leading and trailing blank lines are dropped; interior ones are kept
///   but emptied.
/// - The smallest leading-whitespace run over the non-blank lines is
///   removed from every non-blank line.
/// - Every emitted line, including the last, ends with `\n`.
///
/// A body with no non-blank lines formats to the empty string. The result
/// is a fixed point: formatting it again returns it unchanged.
///
/// # Example
/// ```
/// use snippet_blocks::format_snippet;
///
/// let raw = "\n        if (ready)\n            Go();\n\n";
/// assert_eq!(format_snippet(raw), "if (ready)\n    Go();\n");
/// ```
pub fn format_snippet(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    // A non-blank line exists, so this always finds one
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    let body = &lines[first..=last];

    let indent = body
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut output = String::with_capacity(raw.len());
    for line in body {
        if !is_blank(line) {
            output.push_str(strip_chars(line, indent));
        }
        output.push('\n');
    }
    output
}

fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// Number of leading whitespace characters (not bytes).
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn strip_chars(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
