use crate::token::{Position, TokenKind};
use thiserror::Error;

/// Everything that can abort a parse.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A document keyword appeared deeper than the document being read.
    #[error(
        "documents cannot be nested (line {}: indent {indent}, document indent {expected_indent})",
        .position.line + 1
    )]
    NestedDocument {
        indent: usize,
        expected_indent: usize,
        position: Position,
    },

    /// A token a type body has no production for.
    #[error(
        "unexpected token: {kind}: {text} {indent} {expected_indent} (line {})",
        .position.line + 1
    )]
    UnexpectedToken {
        kind: TokenKind,
        text: String,
        indent: usize,
        expected_indent: usize,
        position: Position,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
