//! Error types for md2html.

use thiserror::Error;

/// Result type for md2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown to HTML.
#[derive(Error, Debug)]
pub enum Error {
    /// A markup delimiter was opened but never closed in a text run.
    #[error("Unterminated `{delimiter}` delimiter in: {fragment}")]
    UnterminatedDelimiter { delimiter: String, fragment: String },

    /// A code fence was opened but never closed.
    #[error("Unterminated code fence: {fragment}")]
    UnterminatedFence { fragment: String },

    /// A text kind name that has no HTML mapping.
    #[error("Unsupported text kind: {0}")]
    UnsupportedTextKind(String),

    /// A link or image text node has no URL.
    #[error("{kind} node has no URL: {text}")]
    MissingUrl { kind: String, text: String },

    /// A leaf node has no value to render.
    #[error("Leaf node has no value (tag: {tag:?})")]
    MissingLeafValue { tag: Option<String> },

    /// A parent node has no tag.
    #[error("Parent node has no tag")]
    MissingParentTag,

    /// A parent node has no children list (as opposed to an empty one).
    #[error("Parent node <{tag}> has no children")]
    MissingChildren { tag: String },

    /// The document has no level-1 heading to use as page title.
    #[error("No title found: document has no `# ` heading")]
    MissingTitle,

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
