//! Scribl error types for lexing and parsing.
//!
//! This module provides the structured errors surfaced by the lexer and
//! parser. Every error carries the source position (byte offset, line,
//! and column) where it occurred.

use thiserror::Error;

use crate::SourcePosition;

/// An error produced while tokenizing source text.
///
/// # Examples
///
/// ```
/// use core_types::{LexError, SourcePosition};
///
/// let error = LexError::UnterminatedString {
///     position: SourcePosition { line: 1, column: 1, offset: 0 },
/// };
///
/// assert!(error.to_string().contains("unterminated string"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A single-quoted string hit a newline or end of input before its
    /// closing quote
    #[error("unterminated string literal at {position}")]
    UnterminatedString {
        /// Where the string literal started
        position: SourcePosition,
    },

    /// A template string or one of its interpolations was not closed
    #[error("unterminated template string at {position}")]
    UnterminatedTemplate {
        /// Where the template string started
        position: SourcePosition,
    },

    /// A `/* ... */` comment hit end of input before `*/`
    #[error("unterminated comment at {position}")]
    UnterminatedComment {
        /// Where the comment started
        position: SourcePosition,
    },

    /// A character that no token rule matches
    #[error("unexpected character '{character}' at {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it occurred
        position: SourcePosition,
    },
}

impl LexError {
    /// The position at which the error occurred.
    pub fn position(&self) -> SourcePosition {
        match self {
            LexError::UnterminatedString { position }
            | LexError::UnterminatedTemplate { position }
            | LexError::UnterminatedComment { position }
            | LexError::UnexpectedCharacter { position, .. } => *position,
        }
    }
}

/// An error produced while parsing a token stream.
///
/// The parser is non-recovering: the first error aborts the parse and
/// no partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer failed before parsing could begin
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The parser found a token outside the expected set
    #[error("expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        /// Description of what the grammar allowed at this point
        expected: String,
        /// Description of the token actually found
        found: String,
        /// Where the token starts
        position: SourcePosition,
    },

    /// The left side of an `=` is not an assignable form
    #[error("invalid assignment target at {position}")]
    InvalidAssignable {
        /// Where the non-assignable expression starts
        position: SourcePosition,
    },

    /// Input nesting exceeded the parser's recursion-depth limit
    #[error("recursion limit exceeded at {position}")]
    RecursionLimitExceeded {
        /// Where the parser gave up
        position: SourcePosition,
    },
}

impl ParseError {
    /// The position at which the error occurred.
    pub fn position(&self) -> SourcePosition {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::UnexpectedToken { position, .. }
            | ParseError::InvalidAssignable { position }
            | ParseError::RecursionLimitExceeded { position } => *position,
        }
    }
}
