//! Integration test suite for the Scribl parser
//!
//! This crate exercises the lexer and parser together over complete
//! source programs, across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use core_types;
    pub use parser;
}
