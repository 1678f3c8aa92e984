//! Core Scribl source-tracking and error types.
//!
//! This crate provides the foundational types shared across the Scribl
//! parser components: source positions, spans, and structured errors.
//!
//! # Overview
//!
//! - [`SourcePosition`] - Line, column, and byte offset in source text
//! - [`Span`] - Half-open source region carried by tokens and nodes
//! - [`LexError`] - Tokenization failures
//! - [`ParseError`] - Parse failures, including lifted lex errors
//!
//! # Examples
//!
//! ```
//! use core_types::{SourcePosition, Span};
//!
//! let span = Span::new(
//!     SourcePosition { line: 1, column: 1, offset: 0 },
//!     SourcePosition { line: 1, column: 5, offset: 4 },
//! );
//! assert_eq!(span.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;

pub use error::{LexError, ParseError};
pub use source::{SourcePosition, Span};
