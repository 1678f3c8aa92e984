//! Scribl lexer and parser.
//!
//! This crate turns Scribl source text into a typed syntax tree. The
//! pipeline has two stages:
//!
//! 1. [`tokenize`] produces a token stream plus a side list of trivia
//!    (whitespace and comments). Template strings lex as single
//!    structured tokens whose interpolations carry nested sub-token
//!    streams.
//! 2. [`Parser`] runs recursive descent over the tokens, with binary
//!    operators handled by precedence climbing over a fixed table.
//!
//! # Examples
//!
//! ```
//! use parser::{parse, Expression};
//!
//! let program = parse("x = 1 + 2;").unwrap();
//! assert_eq!(program.statements.len(), 1);
//! assert!(matches!(
//!     program.statements[0],
//!     Expression::AssignmentExpression { .. }
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{
    AssignTarget, BinaryOperator, Block, Expression, Identifier, IteratorElement, Parameter,
    Pattern, PatternTarget, TemplatePart, UnaryOperator,
};
pub use lexer::{
    tokenize, Lexer, NumberKind, Punctuator, TemplateSegment, Token, TokenKind, Trivia, TriviaKind,
};
pub use parser::{
    parse, parse_expression, parse_pattern, parse_with_trivia, Parser, MAX_RECURSION_DEPTH,
};
