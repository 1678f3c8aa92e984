//! Source position and span types for Scribl parse trees.
//!
//! This module provides types for tracking where tokens, syntax tree
//! nodes, and errors sit inside the original source text.

use std::fmt;

/// Represents a position in source code.
///
/// Used for error reporting and span tracking to indicate where
/// something occurred.
///
/// # Examples
///
/// ```
/// use core_types::SourcePosition;
///
/// let pos = SourcePosition {
///     line: 10,
///     column: 5,
///     offset: 150,
/// };
///
/// assert_eq!(pos.line, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed)
    pub column: u32,
    /// Byte offset from the start of the source text
    pub offset: usize,
}

impl SourcePosition {
    /// The position of the very first character of a source text.
    pub fn start() -> Self {
        SourcePosition {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (offset {})",
            self.line, self.column, self.offset
        )
    }
}

/// A half-open region of source text, `[start.offset, end.offset)`.
///
/// Every syntax tree node carries a span. Spans produced by the parser
/// are non-empty except for the block of an empty program, which has
/// no token to anchor it.
///
/// # Examples
///
/// ```
/// use core_types::{SourcePosition, Span};
///
/// let span = Span {
///     start: SourcePosition { line: 1, column: 1, offset: 0 },
///     end: SourcePosition { line: 1, column: 3, offset: 2 },
/// };
///
/// assert_eq!(span.len(), 2);
/// assert!(!span.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Position of the first byte covered by the span
    pub start: SourcePosition,
    /// Position one past the last byte covered by the span
    pub end: SourcePosition,
}

impl Span {
    /// Create a span covering `start` up to (not including) `end`.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Span { start, end }
    }

    /// The number of bytes covered by the span.
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Whether the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(&self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.offset, self.end.offset)
    }
}
