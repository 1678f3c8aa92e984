//! Abstract Syntax Tree node definitions for Scribl.
//!
//! Nodes are tagged unions carrying source spans. Trees are built
//! bottom-up in one pass, are immutable once returned, and are owned
//! exclusively by the caller.

use core_types::{ParseError, Span};

use crate::lexer::NumberKind;

/// An identifier with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier text
    pub name: String,
    /// Source location
    pub span: Span,
}

/// A sequence of statements.
///
/// The same shape serves as the whole-program unit, a function body,
/// and an explicit `{ ... }` block used as a value-producing
/// expression. Statements are expressions; their separators (one or
/// more `;`) are consumed during parsing and not represented.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements, in source order
    pub statements: Vec<Expression>,
    /// Source location (the whole program, or `{` through `}`)
    pub span: Span,
}

/// Scribl expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `true` literal
    BooleanTrue {
        /// Source location
        span: Span,
    },

    /// `false` literal
    BooleanFalse {
        /// Source location
        span: Span,
    },

    /// `void` literal
    Void {
        /// Source location
        span: Span,
    },

    /// Numeric literal, kept as raw source text
    Number {
        /// Which numeric form was written
        kind: NumberKind,
        /// The literal exactly as written
        raw: String,
        /// Source location
        span: Span,
    },

    /// Single-quoted string literal
    StringLiteral {
        /// The string content (no escape processing)
        value: String,
        /// Source location
        span: Span,
    },

    /// Double-quoted template string
    TemplateString {
        /// Literal text and interpolations, in source order
        parts: Vec<TemplatePart>,
        /// Source location
        span: Span,
    },

    /// Identifier reference
    Identifier(Identifier),

    /// Explicit `{ ... }` block used as an expression
    Block(Block),

    /// Array literal
    Iterator {
        /// Element expressions (spread elements allowed)
        elements: Vec<Expression>,
        /// Source location
        span: Span,
    },

    /// Anonymous function `(params) { body }`
    Function {
        /// Positional or destructured parameters
        params: Vec<Parameter>,
        /// Function body
        body: Block,
        /// Source location
        span: Span,
    },

    /// Call `callee(args)`
    CallExpression {
        /// The expression being called
        callee: Box<Expression>,
        /// Argument expressions (spread elements allowed)
        args: Vec<Expression>,
        /// Source location
        span: Span,
    },

    /// Member access `object.property`
    MemberExpression {
        /// The object expression
        object: Box<Expression>,
        /// The property name
        property: Identifier,
        /// Source location
        span: Span,
    },

    /// Subscript `object[indices]`, one or more comma-separated indices
    SubscriptExpression {
        /// The object expression
        object: Box<Expression>,
        /// Index expressions (at least one)
        indices: Vec<Expression>,
        /// Source location
        span: Span,
    },

    /// Spread `...operand`, valid only as a call argument or array
    /// literal element
    SpreadExpression {
        /// The expression being spread
        operand: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Prefix unary expression
    UnaryExpression {
        /// The operator
        operator: UnaryOperator,
        /// The operand
        operand: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Binary expression
    BinaryExpression {
        /// The operator
        operator: BinaryOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Assignment `target = value`
    AssignmentExpression {
        /// The assignable left side
        target: Box<AssignTarget>,
        /// The value expression
        value: Box<Expression>,
        /// Source location
        span: Span,
    },

    /// Parenthesized expression
    ParenthesizedExpression {
        /// The wrapped expression
        inner: Box<Expression>,
        /// Source location (including the parentheses)
        span: Span,
    },
}

impl Expression {
    /// The source span covered by this expression.
    pub fn span(&self) -> Span {
        match self {
            Expression::BooleanTrue { span }
            | Expression::BooleanFalse { span }
            | Expression::Void { span }
            | Expression::Number { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::TemplateString { span, .. }
            | Expression::Iterator { span, .. }
            | Expression::Function { span, .. }
            | Expression::CallExpression { span, .. }
            | Expression::MemberExpression { span, .. }
            | Expression::SubscriptExpression { span, .. }
            | Expression::SpreadExpression { span, .. }
            | Expression::UnaryExpression { span, .. }
            | Expression::BinaryExpression { span, .. }
            | Expression::AssignmentExpression { span, .. }
            | Expression::ParenthesizedExpression { span, .. } => *span,
            Expression::Identifier(identifier) => identifier.span,
            Expression::Block(block) => block.span,
        }
    }
}

/// One part of a template string.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// A run of literal text
    LiteralText {
        /// The text
        text: String,
        /// Source location
        span: Span,
    },
    /// A `${ ... }` interpolation
    Interpolation {
        /// The interpolated expression
        expression: Expression,
        /// Source location (`$` through the closing `}`)
        span: Span,
    },
}

/// A function parameter: either a plain expression or a destructuring
/// pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
    /// Ordinary positional parameter
    Expression(Expression),
    /// Destructured parameter
    Pattern(Pattern),
}

/// A destructuring target shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Block-like destructuring `{a, b}`
    DestructuringBlock {
        /// The bound entries, in source order
        entries: Vec<PatternTarget>,
        /// Source location
        span: Span,
    },
    /// Iterator-like destructuring `[a, , ...b]`
    DestructuringIterator {
        /// The elements; `None` is an elision hole. The sequence
        /// length is fixed by the comma count.
        elements: Vec<Option<IteratorElement>>,
        /// Source location
        span: Span,
    },
}

impl Pattern {
    /// The source span covered by this pattern.
    pub fn span(&self) -> Span {
        match self {
            Pattern::DestructuringBlock { span, .. }
            | Pattern::DestructuringIterator { span, .. } => *span,
        }
    }
}

/// A single binding inside a pattern: a name or a nested pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternTarget {
    /// Bind to a name
    Identifier(Identifier),
    /// Destructure further
    Pattern(Pattern),
}

impl PatternTarget {
    /// The source span covered by this target.
    pub fn span(&self) -> Span {
        match self {
            PatternTarget::Identifier(identifier) => identifier.span,
            PatternTarget::Pattern(pattern) => pattern.span(),
        }
    }
}

/// One present element of a destructuring iterator.
#[derive(Debug, Clone, PartialEq)]
pub struct IteratorElement {
    /// Whether the element carries a `...` spread prefix
    pub spread: bool,
    /// What the element binds
    pub target: PatternTarget,
    /// Source location, the `...` prefix included when present
    pub span: Span,
}

/// The left side of an assignment.
///
/// Membership is enforced at construction time: an
/// [`Expression::AssignmentExpression`] can never hold a
/// non-assignable target. Build one from a parsed expression with
/// [`AssignTarget::from_expression`].
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// Assign to a name
    Identifier(Identifier),
    /// Assign through member access
    MemberExpression {
        /// The object expression
        object: Box<Expression>,
        /// The property name
        property: Identifier,
        /// Source location
        span: Span,
    },
    /// Assign through a subscript
    SubscriptExpression {
        /// The object expression
        object: Box<Expression>,
        /// Index expressions
        indices: Vec<Expression>,
        /// Source location
        span: Span,
    },
    /// Destructure into a pattern
    Pattern(Pattern),
}

impl AssignTarget {
    /// Convert a parsed expression into an assignment target.
    ///
    /// Only identifiers, member expressions, and subscript expressions
    /// are assignable; anything else (including a parenthesized
    /// expression) fails with [`ParseError::InvalidAssignable`].
    pub fn from_expression(expression: Expression) -> Result<AssignTarget, ParseError> {
        match expression {
            Expression::Identifier(identifier) => Ok(AssignTarget::Identifier(identifier)),
            Expression::MemberExpression {
                object,
                property,
                span,
            } => Ok(AssignTarget::MemberExpression {
                object,
                property,
                span,
            }),
            Expression::SubscriptExpression {
                object,
                indices,
                span,
            } => Ok(AssignTarget::SubscriptExpression {
                object,
                indices,
                span,
            }),
            other => Err(ParseError::InvalidAssignable {
                position: other.span().start,
            }),
        }
    }

    /// The source span covered by this target.
    pub fn span(&self) -> Span {
        match self {
            AssignTarget::Identifier(identifier) => identifier.span,
            AssignTarget::MemberExpression { span, .. }
            | AssignTarget::SubscriptExpression { span, .. } => *span,
            AssignTarget::Pattern(pattern) => pattern.span(),
        }
    }
}

/// Prefix unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT `!`
    Not,
    /// Bitwise NOT `~`
    BitwiseNot,
    /// Negation `-`
    Minus,
    /// Plus `+`
    Plus,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Exponentiation `**`
    Exp,
    /// Multiplication
    Mul,
    /// Division
    Div,
    /// Modulo
    Mod,
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Left shift `<<`
    LeftShift,
    /// Right shift `>>`
    RightShift,
    /// Unsigned right shift `>>>`
    UnsignedRightShift,
    /// Less than
    Lt,
    /// Less than or equal
    LtEq,
    /// Greater than
    Gt,
    /// Greater than or equal
    GtEq,
    /// Equality `==`
    Eq,
    /// Inequality `!=`
    NotEq,
    /// Bitwise AND
    BitwiseAnd,
    /// Bitwise XOR
    BitwiseXor,
    /// Bitwise OR
    BitwiseOr,
    /// Logical AND `&&`
    LogicalAnd,
    /// Logical OR `||`
    LogicalOr,
    /// Nullish coalescing `??`
    NullishCoalesce,
}
