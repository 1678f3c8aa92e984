//! Error Reporting Integration Tests
//!
//! Tests that failures anywhere in the pipeline surface as structured
//! errors with precise source positions and readable messages.

use core_types::{LexError, ParseError};
use parser::{parse, parse_expression, MAX_RECURSION_DEPTH};

/// Helper to parse a program and unwrap the error
fn parse_err(source: &str) -> ParseError {
    parse(source).expect_err("parse unexpectedly succeeded")
}

/// Test: An unterminated string is a lex error at the opening quote
#[test]
fn test_unterminated_string() {
    let err = parse_err("x = 'abc");
    match &err {
        ParseError::Lex(LexError::UnterminatedString { position }) => {
            assert_eq!(position.offset, 4);
            assert_eq!(position.column, 5);
        }
        other => panic!("expected unterminated string, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "unterminated string literal at line 1, column 5 (offset 4)"
    );
}

/// Test: A newline inside a single-quoted string is unterminated
#[test]
fn test_string_may_not_span_lines() {
    assert!(matches!(
        parse_err("'a\nb'"),
        ParseError::Lex(LexError::UnterminatedString { .. })
    ));
}

/// Test: An unterminated template reports the template's start
#[test]
fn test_unterminated_template() {
    let err = parse_err(r#"msg = "open ${a"#);
    match err {
        ParseError::Lex(LexError::UnterminatedTemplate { position }) => {
            assert_eq!(position.offset, 6);
        }
        other => panic!("expected unterminated template, got {:?}", other),
    }
}

/// Test: An unterminated block comment is a lex error
#[test]
fn test_unterminated_comment() {
    let err = parse_err("1; /* trailing");
    match err {
        ParseError::Lex(LexError::UnterminatedComment { position }) => {
            assert_eq!(position.offset, 3);
        }
        other => panic!("expected unterminated comment, got {:?}", other),
    }
}

/// Test: Characters outside the language are rejected with position
#[test]
fn test_unexpected_character() {
    let err = parse_err("a @ b;");
    match err {
        ParseError::Lex(LexError::UnexpectedCharacter {
            character,
            position,
        }) => {
            assert_eq!(character, '@');
            assert_eq!(position.column, 3);
        }
        other => panic!("expected unexpected character, got {:?}", other),
    }
    // '?' only exists doubled as '??'
    assert!(matches!(
        parse_err("a ? b;"),
        ParseError::Lex(LexError::UnexpectedCharacter { character: '?', .. })
    ));
}

/// Test: A missing semicolon names the expectation and the culprit
#[test]
fn test_missing_semicolon() {
    let err = parse_err("1 + 2");
    assert_eq!(
        err.to_string(),
        "expected ';', found end of input at line 1, column 6 (offset 5)"
    );
}

/// Test: An unexpected token mid-expression is positioned precisely
#[test]
fn test_unexpected_token_position() {
    let err = parse_err("x = ;");
    match &err {
        ParseError::UnexpectedToken {
            expected,
            found,
            position,
        } => {
            assert_eq!(expected, "expression");
            assert_eq!(found, "';'");
            assert_eq!(position.offset, 4);
        }
        other => panic!("expected unexpected-token error, got {:?}", other),
    }
}

/// Test: Assigning to a non-assignable form is its own error
#[test]
fn test_invalid_assignment_target() {
    let err = parse_err("1 = 2;");
    assert_eq!(
        err.to_string(),
        "invalid assignment target at line 1, column 1 (offset 0)"
    );
    assert!(matches!(
        parse_err("f() = 2;"),
        ParseError::InvalidAssignable { .. }
    ));
}

/// Test: Pathologically nested input fails with the recursion error,
/// not a stack overflow
#[test]
fn test_recursion_limit() {
    let depth = MAX_RECURSION_DEPTH + 1;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(
        parse_err(&source),
        ParseError::RecursionLimitExceeded { .. }
    ));

    let bracketed = format!("{}1{};", "[".repeat(depth), "]".repeat(depth));
    assert!(matches!(
        parse_err(&bracketed),
        ParseError::RecursionLimitExceeded { .. }
    ));
}

/// Test: Every parse error exposes a position accessor
#[test]
fn test_error_position_accessor() {
    let err = parse_err("a +\n+ ;");
    let position = err.position();
    assert_eq!(position.line, 2);
    assert_eq!(position.column, 3);
}

/// Test: An empty interpolation is rejected, not silently dropped
#[test]
fn test_empty_interpolation() {
    let err = parse_expression(r#""${}""#).expect_err("parse unexpectedly succeeded");
    match err {
        ParseError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "expression");
            assert_eq!(found, "end of input");
        }
        other => panic!("expected unexpected-token error, got {:?}", other),
    }
}
