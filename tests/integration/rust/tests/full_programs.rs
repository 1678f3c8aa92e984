//! Full Program Integration Tests
//!
//! Tests the complete flow over realistic multi-statement sources:
//! Source -> Lexer -> Parser -> AST.

use parser::{
    parse, AssignTarget, BinaryOperator, Block, Expression, Parameter, Pattern, TemplatePart,
};

/// Helper to parse a program or fail with the error message
fn program(source: &str) -> Block {
    parse(source).unwrap_or_else(|e| panic!("parse failed: {}", e))
}

/// Test: A small program with functions, destructuring, and templates
#[test]
fn test_vector_scaling_program() {
    let source = r#"
// Scale a vector by a factor
scale = (factor, [x, y, z]) { [factor * x, factor * y, factor * z]; };
v = scale(2, [1, 2, 3]);
msg = "v = ${v[0]}, ${v[1]}, ${v[2]}";
"#;
    let block = program(source);
    assert_eq!(block.statements.len(), 3);

    match &block.statements[0] {
        Expression::AssignmentExpression { target, value, .. } => {
            assert!(matches!(target.as_ref(), AssignTarget::Identifier(i) if i.name == "scale"));
            match value.as_ref() {
                Expression::Function { params, body, .. } => {
                    assert_eq!(params.len(), 2);
                    assert!(matches!(params[0], Parameter::Expression(_)));
                    assert!(matches!(
                        params[1],
                        Parameter::Pattern(Pattern::DestructuringIterator { .. })
                    ));
                    assert_eq!(body.statements.len(), 1);
                    assert!(matches!(body.statements[0], Expression::Iterator { .. }));
                }
                other => panic!("expected function, got {:?}", other),
            }
        }
        other => panic!("expected assignment, got {:?}", other),
    }

    assert!(matches!(
        &block.statements[1],
        Expression::AssignmentExpression { value, .. }
            if matches!(value.as_ref(), Expression::CallExpression { args, .. } if args.len() == 2)
    ));

    match &block.statements[2] {
        Expression::AssignmentExpression { value, .. } => match value.as_ref() {
            Expression::TemplateString { parts, .. } => {
                let interpolations = parts
                    .iter()
                    .filter(|p| matches!(p, TemplatePart::Interpolation { .. }))
                    .count();
                assert_eq!(interpolations, 3);
            }
            other => panic!("expected template string, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

/// Test: Destructuring assignment and iterator literals coexist
#[test]
fn test_destructuring_round_trip() {
    let block = program("pair = [1, 2];\n[first, second] = pair;\n{first, second} = obj;");
    assert_eq!(block.statements.len(), 3);
    assert!(matches!(
        &block.statements[0],
        Expression::AssignmentExpression { value, .. }
            if matches!(value.as_ref(), Expression::Iterator { .. })
    ));
    assert!(matches!(
        &block.statements[1],
        Expression::AssignmentExpression { target, .. }
            if matches!(target.as_ref(), AssignTarget::Pattern(Pattern::DestructuringIterator { .. }))
    ));
    assert!(matches!(
        &block.statements[2],
        Expression::AssignmentExpression { target, .. }
            if matches!(target.as_ref(), AssignTarget::Pattern(Pattern::DestructuringBlock { .. }))
    ));
}

/// Test: Spread arguments flow through calls
#[test]
fn test_spread_call_program() {
    let block = program("total = sum(...values, bonus);");
    match &block.statements[0] {
        Expression::AssignmentExpression { value, .. } => match value.as_ref() {
            Expression::CallExpression { args, .. } => {
                assert_eq!(args.len(), 2);
                assert!(matches!(args[0], Expression::SpreadExpression { .. }));
            }
            other => panic!("expected call, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

/// Test: Logical and coalescing operators nest with the right precedence
#[test]
fn test_logical_operator_program() {
    // a && b || c ?? d => ((a && b) || c) ?? d
    let block = program("x = a && b || c ?? d;");
    match &block.statements[0] {
        Expression::AssignmentExpression { value, .. } => match value.as_ref() {
            Expression::BinaryExpression {
                operator: BinaryOperator::NullishCoalesce,
                left,
                ..
            } => {
                assert!(matches!(
                    left.as_ref(),
                    Expression::BinaryExpression {
                        operator: BinaryOperator::LogicalOr,
                        ..
                    }
                ));
            }
            other => panic!("expected coalescing, got {:?}", other),
        },
        other => panic!("expected assignment, got {:?}", other),
    }
}

/// Test: Comments and blank lines do not change the tree shape
#[test]
fn test_comment_insensitivity() {
    let plain = program("x = f(1) + 2;");
    let commented = program("x /* target */ = f(\n  1 // arg\n) + 2;");
    assert_eq!(plain.statements.len(), commented.statements.len());
    // Spans differ; the structure must not
    match (&plain.statements[0], &commented.statements[0]) {
        (
            Expression::AssignmentExpression { value: a, .. },
            Expression::AssignmentExpression { value: b, .. },
        ) => {
            assert!(matches!(
                a.as_ref(),
                Expression::BinaryExpression {
                    operator: BinaryOperator::Add,
                    ..
                }
            ));
            assert!(matches!(
                b.as_ref(),
                Expression::BinaryExpression {
                    operator: BinaryOperator::Add,
                    ..
                }
            ));
        }
        other => panic!("expected two assignments, got {:?}", other),
    }
}

/// Test: Parsing is deterministic across repeated runs
#[test]
fn test_deterministic_reparse() {
    let source = r#"
handler = ({method, path}, [head, ...rest]) {
    key = "${method} ${path}";
    table[key, 0] = head;
    rest;
};
"#;
    let first = program(source);
    let second = program(source);
    assert_eq!(first, second);
}

/// Test: The program block spans the whole input
#[test]
fn test_program_span() {
    let source = "a;\nb;\n";
    let block = program(source);
    assert_eq!(block.span.start.offset, 0);
    assert_eq!(block.span.end.offset, source.len());
    assert_eq!(block.span.start.line, 1);
    assert_eq!(block.span.end.line, 3);
}

/// Test: Deep but legal parenthesis nesting parses in a single pass,
/// well below the recursion limit
#[test]
fn test_deep_paren_nesting() {
    let depth = 100;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let block = program(&source);
    assert_eq!(block.statements.len(), 1);
}

/// Test: An empty program parses to an empty block
#[test]
fn test_empty_program() {
    assert!(program("").statements.is_empty());
    assert!(program("  \n\t").statements.is_empty());
    assert!(program("// nothing here").statements.is_empty());
}
