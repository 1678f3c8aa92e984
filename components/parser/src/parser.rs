//! Recursive descent parser for Scribl.
//!
//! Expressions are parsed by precedence climbing over a fixed operator
//! table. The grammar's four local ambiguities (destructuring vs.
//! block/iterator/parenthesized forms) are resolved by speculative,
//! side-effect-free sub-parses with fallback: parser state is nothing
//! but a cursor position and a recursion-depth counter, so discarding
//! a failed attempt is restoring those two fields.

use core_types::{ParseError, SourcePosition, Span};

use crate::ast::{
    AssignTarget, BinaryOperator, Block, Expression, Identifier, IteratorElement, Parameter,
    Pattern, PatternTarget, TemplatePart, UnaryOperator,
};
use crate::error::{recursion_limit, unexpected_token};
use crate::lexer::{self, Punctuator, TemplateSegment, Token, TokenKind, Trivia};

/// Maximum recursive-descent depth before a parse fails with
/// [`ParseError::RecursionLimitExceeded`].
pub const MAX_RECURSION_DEPTH: usize = 256;

/// One row of the binary operator table.
struct BinaryOp {
    punctuator: Punctuator,
    operator: BinaryOperator,
    precedence: u8,
    right_assoc: bool,
}

/// The operator table: process-wide, read-only, shared by all parses.
///
/// Higher precedence binds tighter. Assignment (`=`) is not in the
/// table; it sits below every row here and is handled separately
/// because its left side is restricted to assignable forms.
static BINARY_OPERATORS: &[BinaryOp] = &[
    BinaryOp { punctuator: Punctuator::StarStar, operator: BinaryOperator::Exp, precedence: 13, right_assoc: true },
    BinaryOp { punctuator: Punctuator::Star, operator: BinaryOperator::Mul, precedence: 12, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Slash, operator: BinaryOperator::Div, precedence: 12, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Percent, operator: BinaryOperator::Mod, precedence: 12, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Plus, operator: BinaryOperator::Add, precedence: 11, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Minus, operator: BinaryOperator::Sub, precedence: 11, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Shl, operator: BinaryOperator::LeftShift, precedence: 10, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Shr, operator: BinaryOperator::RightShift, precedence: 10, right_assoc: false },
    BinaryOp { punctuator: Punctuator::UShr, operator: BinaryOperator::UnsignedRightShift, precedence: 10, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Lt, operator: BinaryOperator::Lt, precedence: 9, right_assoc: false },
    BinaryOp { punctuator: Punctuator::LtEq, operator: BinaryOperator::LtEq, precedence: 9, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Gt, operator: BinaryOperator::Gt, precedence: 9, right_assoc: false },
    BinaryOp { punctuator: Punctuator::GtEq, operator: BinaryOperator::GtEq, precedence: 9, right_assoc: false },
    BinaryOp { punctuator: Punctuator::EqEq, operator: BinaryOperator::Eq, precedence: 8, right_assoc: false },
    BinaryOp { punctuator: Punctuator::BangEq, operator: BinaryOperator::NotEq, precedence: 8, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Amp, operator: BinaryOperator::BitwiseAnd, precedence: 7, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Caret, operator: BinaryOperator::BitwiseXor, precedence: 6, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Pipe, operator: BinaryOperator::BitwiseOr, precedence: 5, right_assoc: false },
    BinaryOp { punctuator: Punctuator::AmpAmp, operator: BinaryOperator::LogicalAnd, precedence: 4, right_assoc: false },
    BinaryOp { punctuator: Punctuator::PipePipe, operator: BinaryOperator::LogicalOr, precedence: 3, right_assoc: false },
    BinaryOp { punctuator: Punctuator::Coalesce, operator: BinaryOperator::NullishCoalesce, precedence: 2, right_assoc: false },
];

/// Parse a complete program into a [`Block`].
pub fn parse(source: &str) -> Result<Block, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_program()
}

/// Parse a complete program, also returning the trivia side list.
pub fn parse_with_trivia(source: &str) -> Result<(Block, Vec<Trivia>), ParseError> {
    let mut parser = Parser::new(source)?;
    let block = parser.parse_program()?;
    Ok((block, parser.into_trivia()))
}

/// Parse a source text that consists of exactly one expression.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_complete_expression()
}

/// Parse a source text that consists of exactly one pattern.
pub fn parse_pattern(source: &str) -> Result<Pattern, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_complete_pattern()
}

/// Scribl parser over a pre-lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
    trivia: Vec<Trivia>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Create a parser for the given source text, tokenizing it up
    /// front.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let (tokens, trivia) = lexer::tokenize(source)?;
        Ok(Parser {
            tokens,
            trivia,
            pos: 0,
            depth: 0,
        })
    }

    /// Sub-parser for an interpolation's token stream. Inherits the
    /// enclosing parser's recursion depth so nesting stays bounded.
    fn with_tokens(tokens: Vec<Token>, depth: usize) -> Self {
        Parser {
            tokens,
            trivia: Vec::new(),
            pos: 0,
            depth,
        }
    }

    /// The trivia collected while tokenizing.
    pub fn trivia(&self) -> &[Trivia] {
        &self.trivia
    }

    /// Consume the parser, taking ownership of the trivia side list.
    pub fn into_trivia(self) -> Vec<Trivia> {
        self.trivia
    }

    /// Parse the whole token stream as a program block.
    pub fn parse_program(&mut self) -> Result<Block, ParseError> {
        let mut statements = Vec::new();
        while !self.at_end() {
            statements.push(self.parse_statement()?);
        }
        // The program block spans the entire input, trivia included
        let end = self.current().span.start;
        Ok(Block {
            statements,
            span: Span::new(SourcePosition::start(), end),
        })
    }

    /// Parse a single expression and require that it consumes the
    /// whole input.
    pub fn parse_complete_expression(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse_expression()?;
        if !self.at_end() {
            return Err(unexpected_token("end of input", self.current()));
        }
        Ok(expression)
    }

    /// Parse a single pattern and require that it consumes the whole
    /// input.
    pub fn parse_complete_pattern(&mut self) -> Result<Pattern, ParseError> {
        let pattern = self.parse_pattern()?;
        if !self.at_end() {
            return Err(unexpected_token("end of input", self.current()));
        }
        Ok(pattern)
    }

    // Token navigation

    fn current(&self) -> &Token {
        // The stream always ends with Eof and the cursor never moves
        // past it, so indexing is in bounds.
        &self.tokens[self.pos]
    }

    fn at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check_punctuator(&self, punctuator: Punctuator) -> bool {
        matches!(&self.current().kind, TokenKind::Punctuator(p) if *p == punctuator)
    }

    fn eat_punctuator(&mut self, punctuator: Punctuator) -> bool {
        if self.check_punctuator(punctuator) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator) -> Result<Token, ParseError> {
        if self.check_punctuator(punctuator) {
            Ok(self.bump())
        } else {
            Err(unexpected_token(
                format!("'{}'", punctuator.symbol()),
                self.current(),
            ))
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(recursion_limit(self.current().span.start));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Run a speculative sub-parse. On failure the cursor position and
    /// depth counter are restored and `None` is returned; those two
    /// fields are the parser's entire mutable state, so a discarded
    /// attempt leaves no trace. A recursion-limit failure is not
    /// speculative and propagates.
    fn try_parse<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        let pos = self.pos;
        let depth = self.depth;
        match parse(self) {
            Ok(value) => Ok(Some(value)),
            Err(err @ ParseError::RecursionLimitExceeded { .. }) => Err(err),
            Err(_) => {
                self.pos = pos;
                self.depth = depth;
                Ok(None)
            }
        }
    }

    // Statements and blocks

    /// `Statement := Expression ';'+`. Newlines are whitespace trivia,
    /// so the grammar's optional trailing newline needs no handling.
    fn parse_statement(&mut self) -> Result<Expression, ParseError> {
        let expression = self.parse_expression()?;
        if !self.check_punctuator(Punctuator::Semicolon) {
            return Err(unexpected_token("';'", self.current()));
        }
        while self.eat_punctuator(Punctuator::Semicolon) {}
        Ok(expression)
    }

    /// `'{' Statement* '}'`, used both as a function body and as a
    /// value-producing block expression.
    fn parse_explicit_block(&mut self) -> Result<Block, ParseError> {
        let lbrace = self.expect_punctuator(Punctuator::LBrace)?;
        let mut statements = Vec::new();
        while !self.check_punctuator(Punctuator::RBrace) {
            if self.at_end() {
                return Err(unexpected_token("'}'", self.current()));
            }
            statements.push(self.parse_statement()?);
        }
        let rbrace = self.bump();
        Ok(Block {
            statements,
            span: lbrace.span.to(rbrace.span),
        })
    }

    // Expressions

    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.enter()?;
        let result = self.parse_assignment_expression();
        self.leave();
        result
    }

    /// Assignment level. A `{` or `[` here is a pattern-eligible
    /// position: the pattern grammar is attempted first and accepted
    /// only when a complete pattern is followed by `=`; otherwise the
    /// cursor is restored and the token parses as a block or iterator.
    fn parse_assignment_expression(&mut self) -> Result<Expression, ParseError> {
        if self.check_punctuator(Punctuator::LBrace) || self.check_punctuator(Punctuator::LBracket)
        {
            let attempt = self.try_parse(|p| {
                let pattern = p.parse_pattern()?;
                if !p.check_punctuator(Punctuator::Assign) {
                    return Err(unexpected_token("'='", p.current()));
                }
                Ok(pattern)
            })?;
            if let Some(pattern) = attempt {
                self.bump(); // =
                let value = self.parse_expression()?;
                let span = pattern.span().to(value.span());
                return Ok(Expression::AssignmentExpression {
                    target: Box::new(AssignTarget::Pattern(pattern)),
                    value: Box::new(value),
                    span,
                });
            }
        }

        let left = self.parse_binary_expression(0)?;
        if self.check_punctuator(Punctuator::Assign) {
            self.bump();
            // Right-associative: a = b = 3 is a = (b = 3)
            let value = self.parse_expression()?;
            let target = AssignTarget::from_expression(left)?;
            let span = target.span().to(value.span());
            return Ok(Expression::AssignmentExpression {
                target: Box::new(target),
                value: Box::new(value),
                span,
            });
        }
        Ok(left)
    }

    /// Precedence climbing over [`BINARY_OPERATORS`].
    fn parse_binary_expression(&mut self, min_precedence: u8) -> Result<Expression, ParseError> {
        self.enter()?;
        let result = self.parse_binary_expression_inner(min_precedence);
        self.leave();
        result
    }

    fn parse_binary_expression_inner(
        &mut self,
        min_precedence: u8,
    ) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary_expression()?;
        while let Some(op) = self.peek_binary_operator() {
            if op.precedence < min_precedence {
                break;
            }
            self.bump();
            let next_min = if op.right_assoc {
                op.precedence
            } else {
                op.precedence + 1
            };
            let right = self.parse_binary_expression(next_min)?;
            let span = left.span().to(right.span());
            left = Expression::BinaryExpression {
                operator: op.operator,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn peek_binary_operator(&self) -> Option<&'static BinaryOp> {
        match &self.current().kind {
            TokenKind::Punctuator(p) => BINARY_OPERATORS.iter().find(|op| op.punctuator == *p),
            _ => None,
        }
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, ParseError> {
        let operator = match &self.current().kind {
            TokenKind::Punctuator(Punctuator::Bang) => Some(UnaryOperator::Not),
            TokenKind::Punctuator(Punctuator::Tilde) => Some(UnaryOperator::BitwiseNot),
            TokenKind::Punctuator(Punctuator::Minus) => Some(UnaryOperator::Minus),
            TokenKind::Punctuator(Punctuator::Plus) => Some(UnaryOperator::Plus),
            _ => None,
        };
        if let Some(operator) = operator {
            self.enter()?;
            let token = self.bump();
            let result = self.parse_unary_expression().map(|operand| {
                let span = token.span.to(operand.span());
                Expression::UnaryExpression {
                    operator,
                    operand: Box::new(operand),
                    span,
                }
            });
            self.leave();
            return result;
        }
        self.parse_postfix_expression()
    }

    /// Postfix chains: `.ident`, `[indices]`, `(args)` attach
    /// left-to-right onto any primary result.
    fn parse_postfix_expression(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.parse_primary_expression()?;
        loop {
            if self.eat_punctuator(Punctuator::Dot) {
                let property = self.parse_identifier()?;
                let span = expr.span().to(property.span);
                expr = Expression::MemberExpression {
                    object: Box::new(expr),
                    property,
                    span,
                };
            } else if self.eat_punctuator(Punctuator::LBracket) {
                let mut indices = vec![self.parse_expression()?];
                while self.eat_punctuator(Punctuator::Comma) {
                    indices.push(self.parse_expression()?);
                }
                let rbracket = self.expect_punctuator(Punctuator::RBracket)?;
                let span = expr.span().to(rbracket.span);
                expr = Expression::SubscriptExpression {
                    object: Box::new(expr),
                    indices,
                    span,
                };
            } else if self.eat_punctuator(Punctuator::LParen) {
                let mut args = Vec::new();
                if !self.check_punctuator(Punctuator::RParen) {
                    loop {
                        args.push(self.parse_spreadable_expression()?);
                        if !self.eat_punctuator(Punctuator::Comma) {
                            break;
                        }
                    }
                }
                let rparen = self.expect_punctuator(Punctuator::RParen)?;
                let span = expr.span().to(rparen.span);
                expr = Expression::CallExpression {
                    callee: Box::new(expr),
                    args,
                    span,
                };
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// An expression that may carry a `...` spread prefix. Only call
    /// argument lists and array literal elements are spread-eligible.
    fn parse_spreadable_expression(&mut self) -> Result<Expression, ParseError> {
        if self.check_punctuator(Punctuator::Spread) {
            let spread = self.bump();
            let operand = self.parse_postfix_expression()?;
            let span = spread.span.to(operand.span());
            return Ok(Expression::SpreadExpression {
                operand: Box::new(operand),
                span,
            });
        }
        self.parse_expression()
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, ParseError> {
        match &self.current().kind {
            TokenKind::Punctuator(Punctuator::LParen) => {
                return self.parse_function_or_parenthesized()
            }
            TokenKind::Punctuator(Punctuator::LBrace) => {
                return Ok(Expression::Block(self.parse_explicit_block()?))
            }
            TokenKind::Punctuator(Punctuator::LBracket) => return self.parse_iterator(),
            _ => {}
        }

        let token = self.bump();
        match token.kind {
            TokenKind::True => Ok(Expression::BooleanTrue { span: token.span }),
            TokenKind::False => Ok(Expression::BooleanFalse { span: token.span }),
            TokenKind::Void => Ok(Expression::Void { span: token.span }),
            TokenKind::Number { kind, raw } => Ok(Expression::Number {
                kind,
                raw,
                span: token.span,
            }),
            TokenKind::Str(value) => Ok(Expression::StringLiteral {
                value,
                span: token.span,
            }),
            TokenKind::Template(segments) => self.parse_template(segments, token.span),
            TokenKind::Identifier(name) => Ok(Expression::Identifier(Identifier {
                name,
                span: token.span,
            })),
            kind => Err(ParseError::UnexpectedToken {
                expected: "expression".to_string(),
                found: kind.describe(),
                position: token.span.start,
            }),
        }
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        let token = self.bump();
        match token.kind {
            TokenKind::Identifier(name) => Ok(Identifier {
                name,
                span: token.span,
            }),
            kind => Err(ParseError::UnexpectedToken {
                expected: "identifier".to_string(),
                found: kind.describe(),
                position: token.span.start,
            }),
        }
    }

    /// Assemble a template string, parsing each interpolation's nested
    /// sub-token stream with a sub-parser. An empty interpolation
    /// (`${}`) is rejected: it has no defined substitution.
    fn parse_template(
        &mut self,
        segments: Vec<TemplateSegment>,
        span: Span,
    ) -> Result<Expression, ParseError> {
        let mut parts = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                TemplateSegment::Chunk { text, span } => {
                    parts.push(TemplatePart::LiteralText { text, span });
                }
                TemplateSegment::Interpolation { tokens, span } => {
                    let mut sub = Parser::with_tokens(tokens, self.depth);
                    let expression = sub.parse_complete_expression()?;
                    parts.push(TemplatePart::Interpolation { expression, span });
                }
            }
        }
        Ok(Expression::TemplateString { parts, span })
    }

    fn parse_iterator(&mut self) -> Result<Expression, ParseError> {
        let lbracket = self.bump();
        let mut elements = Vec::new();
        if !self.check_punctuator(Punctuator::RBracket) {
            loop {
                elements.push(self.parse_spreadable_expression()?);
                if !self.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
        }
        let rbracket = self.expect_punctuator(Punctuator::RBracket)?;
        Ok(Expression::Iterator {
            elements,
            span: lbracket.span.to(rbracket.span),
        })
    }

    /// `(` opens either a function `(params) { body }` or a
    /// parenthesized expression. The interior is parsed exactly once,
    /// as a parameter list (a superset of both shapes); `{` after `)`
    /// commits to a function, otherwise a single-slot list is
    /// reinterpreted as the parenthesized expression it also spells.
    /// Re-parsing the interior on fallback would double the work at
    /// every nesting level.
    fn parse_function_or_parenthesized(&mut self) -> Result<Expression, ParseError> {
        let lparen = self.bump();
        let mut params = Vec::new();
        if !self.check_punctuator(Punctuator::RParen) {
            loop {
                params.push(self.parse_parameter()?);
                if !self.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
        }
        let rparen = self.expect_punctuator(Punctuator::RParen)?;

        if self.check_punctuator(Punctuator::LBrace) {
            let body = self.parse_explicit_block()?;
            let span = lparen.span.to(body.span);
            return Ok(Expression::Function { params, body, span });
        }

        // Not a function body, so the parentheses must wrap exactly
        // one expression. A pattern slot whose source also reads as an
        // expression (an iterator shape without holes) converts back.
        if params.len() == 1 {
            let inner = match params.remove(0) {
                Parameter::Expression(expression) => Some(expression),
                Parameter::Pattern(pattern) => pattern_to_expression(pattern),
            };
            if let Some(inner) = inner {
                return Ok(Expression::ParenthesizedExpression {
                    inner: Box::new(inner),
                    span: lparen.span.to(rparen.span),
                });
            }
        }
        Err(unexpected_token("'{'", self.current()))
    }

    /// A parameter slot is pattern-eligible: a `{`/`[` tries the
    /// pattern grammar first, accepted only if the pattern fills the
    /// whole slot; anything else, or a failed attempt, parses as an
    /// ordinary expression parameter.
    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        if self.check_punctuator(Punctuator::LBrace) || self.check_punctuator(Punctuator::LBracket)
        {
            let attempt = self.try_parse(|p| {
                let pattern = p.parse_pattern()?;
                if !p.check_punctuator(Punctuator::Comma)
                    && !p.check_punctuator(Punctuator::RParen)
                {
                    return Err(unexpected_token("',' or ')'", p.current()));
                }
                Ok(pattern)
            })?;
            if let Some(pattern) = attempt {
                return Ok(Parameter::Pattern(pattern));
            }
        }
        Ok(Parameter::Expression(self.parse_expression()?))
    }

    // Patterns

    fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        self.enter()?;
        let result = self.parse_pattern_inner();
        self.leave();
        result
    }

    fn parse_pattern_inner(&mut self) -> Result<Pattern, ParseError> {
        match &self.current().kind {
            TokenKind::Punctuator(Punctuator::LBrace) => self.parse_destructuring_block(),
            TokenKind::Punctuator(Punctuator::LBracket) => self.parse_destructuring_iterator(),
            _ => Err(unexpected_token("pattern", self.current())),
        }
    }

    /// `'{' (target (',' target)* ','?)? '}'` — entries are identifiers
    /// or nested patterns; anything expression-shaped disqualifies the
    /// pattern interpretation.
    fn parse_destructuring_block(&mut self) -> Result<Pattern, ParseError> {
        let lbrace = self.bump();
        let mut entries = Vec::new();
        if !self.check_punctuator(Punctuator::RBrace) {
            loop {
                entries.push(self.parse_pattern_target()?);
                if !self.eat_punctuator(Punctuator::Comma) {
                    break;
                }
                // Trailing comma
                if self.check_punctuator(Punctuator::RBrace) {
                    break;
                }
            }
        }
        let rbrace = self.expect_punctuator(Punctuator::RBrace)?;
        Ok(Pattern::DestructuringBlock {
            entries,
            span: lbrace.span.to(rbrace.span),
        })
    }

    /// `'[' element? (',' element?)* ']'` — elements may be elided
    /// (holes) and any element may carry a `...` prefix, not only the
    /// last. The element count is fixed by the comma count.
    fn parse_destructuring_iterator(&mut self) -> Result<Pattern, ParseError> {
        let lbracket = self.bump();
        let mut elements = Vec::new();
        if !self.check_punctuator(Punctuator::RBracket) {
            loop {
                if self.check_punctuator(Punctuator::Comma)
                    || self.check_punctuator(Punctuator::RBracket)
                {
                    elements.push(None);
                } else {
                    let start = self.current().span;
                    let spread = self.eat_punctuator(Punctuator::Spread);
                    let target = self.parse_pattern_target()?;
                    let span = start.to(target.span());
                    elements.push(Some(IteratorElement {
                        spread,
                        target,
                        span,
                    }));
                }
                if !self.eat_punctuator(Punctuator::Comma) {
                    break;
                }
            }
        }
        let rbracket = self.expect_punctuator(Punctuator::RBracket)?;
        Ok(Pattern::DestructuringIterator {
            elements,
            span: lbracket.span.to(rbracket.span),
        })
    }

    fn parse_pattern_target(&mut self) -> Result<PatternTarget, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(_) => Ok(PatternTarget::Identifier(self.parse_identifier()?)),
            TokenKind::Punctuator(Punctuator::LBrace | Punctuator::LBracket) => {
                Ok(PatternTarget::Pattern(self.parse_pattern()?))
            }
            _ => Err(unexpected_token("identifier or pattern", self.current())),
        }
    }
}

/// Reinterpret a pattern as the expression spelling the same source,
/// for a `(` interior that turned out not to be a parameter list.
/// Iterator shapes without holes read as array literals; block shapes
/// and elisions have no expression reading.
fn pattern_to_expression(pattern: Pattern) -> Option<Expression> {
    match pattern {
        Pattern::DestructuringBlock { .. } => None,
        Pattern::DestructuringIterator { elements, span } => {
            let mut converted = Vec::with_capacity(elements.len());
            for element in elements {
                let element = element?;
                let operand = pattern_target_to_expression(element.target)?;
                converted.push(if element.spread {
                    Expression::SpreadExpression {
                        operand: Box::new(operand),
                        span: element.span,
                    }
                } else {
                    operand
                });
            }
            Some(Expression::Iterator {
                elements: converted,
                span,
            })
        }
    }
}

fn pattern_target_to_expression(target: PatternTarget) -> Option<Expression> {
    match target {
        PatternTarget::Identifier(identifier) => Some(Expression::Identifier(identifier)),
        PatternTarget::Pattern(pattern) => pattern_to_expression(pattern),
    }
}
