//! Parse error construction helpers.

use core_types::{ParseError, SourcePosition};

use crate::lexer::Token;

/// Create an unexpected-token error at a token's position.
pub fn unexpected_token(expected: impl Into<String>, found: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        expected: expected.into(),
        found: found.kind.describe(),
        position: found.span.start,
    }
}

/// Create a recursion-limit error at a given position.
pub fn recursion_limit(position: SourcePosition) -> ParseError {
    ParseError::RecursionLimitExceeded { position }
}
