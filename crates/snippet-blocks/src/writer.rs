//! Placeholder substitution for documents.
//!
//! Replaces the body of every placeholder with text supplied by a resolver,
//! keeping both fence lines so the document can be rewritten again on the
//! next run. Fences are only lengthened when the inserted text holds a
//! backtick run that would otherwise close the block early.

use crate::placeholder::{Placeholder, longest_fence_run};

/// Outcome of rewriting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The document text after substitution.
    pub content: String,
    /// Number of placeholders whose body was substituted.
    pub replaced: usize,
}

impl Rewrite {
    /// Whether at least one placeholder was substituted.
    ///
    /// This is true even when the substituted text equals what was already
    /// there; compare `content` with the input to detect an actual edit.
    pub fn changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Substitutes the body of each of `placeholders` with `resolve(name)`.
///
/// `placeholders` must come from [`find_placeholders`] on the same
/// `content`. The resolver receives the full snippet key (e.g.
/// `Snippet:Hello`) and returns the text to insert. Lines of that text are
/// re-terminated with the placeholder's line ending and, for indented
/// fences, prefixed with the fence indentation.
///
/// The first resolver error aborts the rewrite and is returned unchanged.
/// Text outside placeholders is copied verbatim, so a document without
/// placeholders comes back byte-identical with `replaced == 0`.
///
/// [`find_placeholders`]: crate::placeholder::find_placeholders
///
/// # Example
/// ```
/// use snippet_blocks::{find_placeholders, rewrite_placeholders};
///
/// let doc = "```cs Snippet:Hi\nstale\n```\n";
/// let found = find_placeholders(doc).unwrap();
/// let rewrite = rewrite_placeholders(doc, &found, |_| Ok::<_, ()>("Say(\"hi\");\n".to_string())).unwrap();
/// assert_eq!(rewrite.content, "```cs Snippet:Hi\nSay(\"hi\");\n```\n");
/// assert!(rewrite.changed());
/// ```
pub fn rewrite_placeholders<E, F>(content: &str, placeholders: &[Placeholder], mut resolve: F) -> Result<Rewrite, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    if placeholders.is_empty() {
        return Ok(Rewrite {
            content: content.to_string(),
            replaced: 0,
        });
    }

    let mut output = String::with_capacity(content.len());
    let mut cursor = 0;

    for placeholder in placeholders {
        let text = resolve(&placeholder.name)?;
        let fence = fence_for(&text, placeholder);

        output.push_str(&content[cursor..placeholder.open_fence.start]);
        output.push_str(&fence);
        output.push_str(&content[placeholder.open_fence.end..placeholder.body.start]);
        output.push_str(&render_body(&text, placeholder));
        output.push_str(&content[placeholder.body.end..placeholder.close_fence.start]);
        output.push_str(&fence);
        cursor = placeholder.close_fence.end;

        tracing::debug!(
            snippet = %placeholder.name,
            language = placeholder.language.as_deref().unwrap_or(""),
            line = placeholder.line,
            "Substituted placeholder"
        );
    }
    output.push_str(&content[cursor..]);

    Ok(Rewrite {
        content: output,
        replaced: placeholders.len(),
    })
}

/// Backticks for both fences: the existing run, or one longer than any run
/// inside `text`.
fn fence_for(text: &str, placeholder: &Placeholder) -> String {
    let len = placeholder.fence_len().max(longest_fence_run(text) + 1);
    if len > placeholder.fence_len() {
        tracing::debug!(snippet = %placeholder.name, len, "Lengthened placeholder fence");
    }
    "`".repeat(len)
}

fn render_body(text: &str, placeholder: &Placeholder) -> String {
    let ending = placeholder.line_ending();
    let mut body = String::with_capacity(text.len() + ending.len());
    for line in text.lines() {
        if !line.is_empty() {
            body.push_str(&placeholder.indent);
            body.push_str(line);
        }
        body.push_str(ending);
    }
    body
}
