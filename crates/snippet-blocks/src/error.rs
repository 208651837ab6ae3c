//! Error types for snippet-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("#endregion on line {line} has no matching #region")]
    UnbalancedRegion { line: usize },

    #[error("#region '{label}' on line {line} is never closed")]
    UnclosedRegion { label: String, line: usize },

    #[error("Placeholder '{name}' on line {line} has no closing fence")]
    UnclosedPlaceholder { name: String, line: usize },

    #[error("Placeholder '{name}' on line {line} is interrupted by a code fence on line {fence_line}")]
    InterruptedPlaceholder {
        name: String,
        line: usize,
        fence_line: usize,
    },
}
