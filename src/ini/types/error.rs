//! Custom error types for the ini-parser crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum IniError {
    /// A line is neither blank, a comment, a `[section]` header nor a `key = value` pair.
    #[error("Invalid line {line}: {content:?}")]
    Format { line: usize, content: String },

    /// An error originating from the file adapters.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested text encoding label is not known.
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// The input bytes are malformed for the encoding used to decode them.
    #[error("Input is not valid {encoding}")]
    Decode { encoding: &'static str },

    /// The text contains characters the target encoding cannot represent.
    #[error("Text cannot be encoded as {encoding}")]
    Encode { encoding: &'static str },
}

impl IniError {
    pub(crate) fn format(line: usize, content: &str) -> Self {
        IniError::Format {
            line,
            content: content.to_string(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `IniError` type.
pub type Result<T> = std::result::Result<T, IniError>;
