//! Lexer/Parser Integration Tests
//!
//! Tests the boundary between tokenization and parsing: token streams,
//! the trivia side list, and template sub-token streams.

use parser::{
    parse_with_trivia, tokenize, Expression, NumberKind, Punctuator, TemplatePart,
    TemplateSegment, TokenKind, TriviaKind,
};

/// Kinds of the tokens produced for a source, Eof included.
fn token_kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(source).expect("tokenize failed");
    tokens.into_iter().map(|t| t.kind).collect()
}

/// Test: A simple statement produces the expected token stream
#[test]
fn test_token_stream_shape() {
    let kinds = token_kinds("x = 1;");
    assert_eq!(kinds.len(), 5);
    assert!(matches!(&kinds[0], TokenKind::Identifier(n) if n == "x"));
    assert!(matches!(kinds[1], TokenKind::Punctuator(Punctuator::Assign)));
    assert!(matches!(&kinds[2], TokenKind::Number { kind: NumberKind::Integer, raw } if raw == "1"));
    assert!(matches!(kinds[3], TokenKind::Punctuator(Punctuator::Semicolon)));
    assert!(matches!(kinds[4], TokenKind::Eof));
}

/// Test: Maximal munch picks the longest punctuator
#[test]
fn test_maximal_munch() {
    assert!(matches!(
        token_kinds("a >>> b")[1],
        TokenKind::Punctuator(Punctuator::UShr)
    ));
    assert!(matches!(
        token_kinds("a == b")[1],
        TokenKind::Punctuator(Punctuator::EqEq)
    ));
    assert!(matches!(
        token_kinds("...rest")[0],
        TokenKind::Punctuator(Punctuator::Spread)
    ));
}

/// Test: All five numeric literal forms are recognized
#[test]
fn test_number_kinds() {
    let cases = [
        ("42", NumberKind::Integer),
        ("3.14", NumberKind::Float),
        ("3.", NumberKind::Float),
        ("0xFF", NumberKind::Hex),
        ("0o17", NumberKind::Octal),
        ("0b101", NumberKind::Binary),
    ];
    for (source, expected) in cases {
        match &token_kinds(source)[0] {
            TokenKind::Number { kind, raw } => {
                assert_eq!(*kind, expected, "source {:?}", source);
                assert_eq!(raw, source);
            }
            other => panic!("expected number for {:?}, got {:?}", source, other),
        }
    }
}

/// Test: A radix prefix with no digits falls back to the shorter match
#[test]
fn test_bare_radix_prefix() {
    let kinds = token_kinds("0x");
    assert!(matches!(&kinds[0], TokenKind::Number { kind: NumberKind::Integer, raw } if raw == "0"));
    assert!(matches!(&kinds[1], TokenKind::Identifier(n) if n == "x"));
}

/// Test: Literal keywords lex as keywords, not identifiers
#[test]
fn test_literal_keywords() {
    assert!(matches!(token_kinds("true")[0], TokenKind::True));
    assert!(matches!(token_kinds("false")[0], TokenKind::False));
    assert!(matches!(token_kinds("void")[0], TokenKind::Void));
    // Prefix-similar identifiers stay identifiers
    assert!(matches!(&token_kinds("voided")[0], TokenKind::Identifier(n) if n == "voided"));
}

/// Test: A template lexes as one structured token
#[test]
fn test_template_token_structure() {
    let kinds = token_kinds(r#""x=${a}!""#);
    assert_eq!(kinds.len(), 2); // template + Eof
    match &kinds[0] {
        TokenKind::Template(segments) => {
            assert_eq!(segments.len(), 3);
            assert!(matches!(&segments[0], TemplateSegment::Chunk { text, .. } if text == "x="));
            match &segments[1] {
                TemplateSegment::Interpolation { tokens, .. } => {
                    // Sub-stream is Eof-terminated for sub-parsing
                    assert_eq!(tokens.len(), 2);
                    assert!(matches!(&tokens[0].kind, TokenKind::Identifier(n) if n == "a"));
                    assert!(matches!(tokens[1].kind, TokenKind::Eof));
                }
                other => panic!("expected interpolation, got {:?}", other),
            }
            assert!(matches!(&segments[2], TemplateSegment::Chunk { text, .. } if text == "!"));
        }
        other => panic!("expected template, got {:?}", other),
    }
}

/// Test: A dollar sign without a brace stays literal text
#[test]
fn test_literal_dollar_in_template() {
    match &token_kinds(r#""cost: $5""#)[0] {
        TokenKind::Template(segments) => {
            assert_eq!(segments.len(), 1);
            assert!(matches!(&segments[0], TemplateSegment::Chunk { text, .. } if text == "cost: $5"));
        }
        other => panic!("expected template, got {:?}", other),
    }
}

/// Test: Braces inside an interpolation balance against the closer
#[test]
fn test_interpolation_brace_balancing() {
    let (block, _) = parse_with_trivia(r#"msg = "v=${ { 1; } }";"#).expect("parse failed");
    match &block.statements[0] {
        Expression::AssignmentExpression { value, .. } => match value.as_ref() {
            Expression::TemplateString { parts, .. } => {
                assert!(matches!(
                    &parts[1],
                    TemplatePart::Interpolation {
                        expression: Expression::Block(b),
                        ..
                    } if b.statements.len() == 1
                ));
            }
            other => panic!("expected template string, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

/// Test: Trivia is preserved on the side, not in the tree
#[test]
fn test_trivia_side_list() {
    let (block, trivia) = parse_with_trivia("a = 1; // set a\n/* done */").expect("parse failed");
    assert_eq!(block.statements.len(), 1);

    let comments: Vec<_> = trivia
        .iter()
        .filter(|t| t.kind != TriviaKind::Whitespace)
        .collect();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].kind, TriviaKind::LineComment);
    assert_eq!(comments[0].text, "// set a");
    assert_eq!(comments[1].kind, TriviaKind::BlockComment);
    assert_eq!(comments[1].text, "/* done */");
}

/// Test: Token spans index back into the source text
#[test]
fn test_token_spans() {
    let source = "abc  = 12";
    let (tokens, _) = tokenize(source).expect("tokenize failed");
    assert_eq!(tokens[0].span.start.offset, 0);
    assert_eq!(tokens[0].span.end.offset, 3);
    assert_eq!(tokens[1].span.start.offset, 5);
    assert_eq!(tokens[2].span.start.offset, 7);
    assert_eq!(tokens[2].span.end.offset, 9);
    // Eof sits at the end of input with an empty span
    assert_eq!(tokens[3].span.start.offset, source.len());
    assert!(tokens[3].span.is_empty());
}

/// Test: Line and column tracking survives newlines
#[test]
fn test_position_tracking_across_lines() {
    let (tokens, _) = tokenize("a;\n  b;").expect("tokenize failed");
    let b = &tokens[2];
    assert!(matches!(&b.kind, TokenKind::Identifier(n) if n == "b"));
    assert_eq!(b.span.start.line, 2);
    assert_eq!(b.span.start.column, 3);
    assert_eq!(b.span.start.offset, 5);
}
