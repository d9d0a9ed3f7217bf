//! Error types for elemchunk.

use std::fmt::Write;
use thiserror::Error;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Main error type for elemchunk operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Chunking or dispatch failed
    #[error("chunking error: {0}")]
    Chunking(#[from] ChunkError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Chunking and dispatch errors.
///
/// Errors raised by a chunker travel through the dispatcher as the same
/// value, so callers can match on the variant the chunker produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// No chunker is registered under the requested strategy name.
    #[error("unrecognized chunking strategy {}", quoted(.0))]
    UnknownStrategy(String),

    /// The accepted option names of a chunker could not be determined.
    #[error("invalid signature for chunker '{chunker}': {reason}")]
    Signature { chunker: String, reason: String },

    /// An option carried a value of the wrong type.
    #[error("invalid value for option '{name}': expected {expected}")]
    InvalidOption { name: String, expected: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("chunking failed: {0}")]
    Failed(String),
}

/// Result type alias for elemchunk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Render `name` as a quoted string literal.
///
/// Single quotes are used unless the name contains a single quote and no
/// double quote. Backslashes, the chosen quote and every non-printable
/// character are escaped; the latter as `\xhh`, `\uhhhh` or `\Uhhhhhhhh`.
pub fn quoted(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(name.len() + 2);
    out.push(quote);
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                // Writing into a String cannot fail.
                let _ = if code < 0x100 {
                    write!(out, "\\x{code:02x}")
                } else if code < 0x10000 {
                    write!(out, "\\u{code:04x}")
                } else {
                    write!(out, "\\U{code:08x}")
                };
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Other, separator and unassigned categories are non-printable; the ASCII
/// space is the one exception.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
