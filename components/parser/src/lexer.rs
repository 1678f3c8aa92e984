//! Scribl lexer - tokenizes source text into tokens plus trivia.
//!
//! The lexer is a single forward pass over the source. Tokens carry
//! spans; whitespace and comments are collected into a side list of
//! [`Trivia`] and never reach the parser.

use core_types::{LexError, SourcePosition, Span};

/// Numeric literal subkinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// Decimal integer, `42`
    Integer,
    /// Float, `3.14` (the fraction may be empty, `3.`)
    Float,
    /// Hexadecimal, `0xFF`
    Hex,
    /// Octal, `0o17`
    Octal,
    /// Binary, `0b101`
    Binary,
}

/// Scribl punctuators (operators and delimiters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punctuator {
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// Opening brace
    LBrace,
    /// Closing brace
    RBrace,
    /// Opening bracket
    LBracket,
    /// Closing bracket
    RBracket,
    /// Semicolon
    Semicolon,
    /// Comma
    Comma,
    /// Dot
    Dot,
    /// Spread operator `...`
    Spread,
    /// Assignment `=`
    Assign,
    /// Logical not `!`
    Bang,
    /// Bitwise not `~`
    Tilde,
    /// Plus
    Plus,
    /// Minus
    Minus,
    /// Multiplication
    Star,
    /// Exponentiation `**`
    StarStar,
    /// Division
    Slash,
    /// Remainder
    Percent,
    /// Shift left `<<`
    Shl,
    /// Shift right `>>`
    Shr,
    /// Unsigned shift right `>>>`
    UShr,
    /// Less than
    Lt,
    /// Less than or equal
    LtEq,
    /// Greater than
    Gt,
    /// Greater than or equal
    GtEq,
    /// Equality `==`
    EqEq,
    /// Inequality `!=`
    BangEq,
    /// Bitwise and
    Amp,
    /// Logical and `&&`
    AmpAmp,
    /// Bitwise xor
    Caret,
    /// Bitwise or
    Pipe,
    /// Logical or `||`
    PipePipe,
    /// Nullish coalescing `??`
    Coalesce,
}

impl Punctuator {
    /// The punctuator's source text.
    pub fn symbol(&self) -> &'static str {
        match self {
            Punctuator::LParen => "(",
            Punctuator::RParen => ")",
            Punctuator::LBrace => "{",
            Punctuator::RBrace => "}",
            Punctuator::LBracket => "[",
            Punctuator::RBracket => "]",
            Punctuator::Semicolon => ";",
            Punctuator::Comma => ",",
            Punctuator::Dot => ".",
            Punctuator::Spread => "...",
            Punctuator::Assign => "=",
            Punctuator::Bang => "!",
            Punctuator::Tilde => "~",
            Punctuator::Plus => "+",
            Punctuator::Minus => "-",
            Punctuator::Star => "*",
            Punctuator::StarStar => "**",
            Punctuator::Slash => "/",
            Punctuator::Percent => "%",
            Punctuator::Shl => "<<",
            Punctuator::Shr => ">>",
            Punctuator::UShr => ">>>",
            Punctuator::Lt => "<",
            Punctuator::LtEq => "<=",
            Punctuator::Gt => ">",
            Punctuator::GtEq => ">=",
            Punctuator::EqEq => "==",
            Punctuator::BangEq => "!=",
            Punctuator::Amp => "&",
            Punctuator::AmpAmp => "&&",
            Punctuator::Caret => "^",
            Punctuator::Pipe => "|",
            Punctuator::PipePipe => "||",
            Punctuator::Coalesce => "??",
        }
    }
}

/// One piece of a lexed template string.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    /// A run of literal text (including literal `$` not followed by `{`)
    Chunk {
        /// The literal text
        text: String,
        /// Span of the text within the template
        span: Span,
    },
    /// A `${ ... }` interpolation, carrying its nested sub-token stream
    Interpolation {
        /// Tokens of the interpolated expression, terminated by `Eof`
        tokens: Vec<Token>,
        /// Span from `$` through the closing `}`
        span: Span,
    },
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `true` literal keyword
    True,
    /// `false` literal keyword
    False,
    /// `void` literal keyword
    Void,
    /// Numeric literal, kept as raw text
    Number {
        /// Which of the five numeric forms matched
        kind: NumberKind,
        /// The literal exactly as written
        raw: String,
    },
    /// Single-quoted string literal (no escapes)
    Str(String),
    /// Double-quoted template string
    Template(Vec<TemplateSegment>),
    /// Identifier
    Identifier(String),
    /// Operator or delimiter
    Punctuator(Punctuator),
    /// End of input
    Eof,
}

impl TokenKind {
    /// Short human-readable description, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::True => "'true'".to_string(),
            TokenKind::False => "'false'".to_string(),
            TokenKind::Void => "'void'".to_string(),
            TokenKind::Number { raw, .. } => format!("number '{}'", raw),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Template(_) => "template string".to_string(),
            TokenKind::Identifier(name) => format!("identifier '{}'", name),
            TokenKind::Punctuator(p) => format!("'{}'", p.symbol()),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// A token with its source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was lexed
    pub kind: TokenKind,
    /// Where it sits in the source
    pub span: Span,
}

/// Kinds of trivia.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriviaKind {
    /// A run of whitespace characters
    Whitespace,
    /// A `//` comment (up to, not including, the newline)
    LineComment,
    /// A `/* ... */` comment
    BlockComment,
}

/// Source text excluded from the token stream but retained as
/// annotation: whitespace and comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Trivia {
    /// Whitespace or comment
    pub kind: TriviaKind,
    /// The trivia text exactly as written
    pub text: String,
    /// Where it sits in the source
    pub span: Span,
}

/// Tokenize a complete source text.
///
/// Returns the token stream (always terminated by an `Eof` token) and
/// the trivia side list, or the first [`LexError`].
pub fn tokenize(source: &str) -> Result<(Vec<Token>, Vec<Trivia>), LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for Scribl source text.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    offset: usize,
    line: u32,
    column: u32,
    trivia: Vec<Trivia>,
}

impl Lexer {
    /// Create a new lexer for the given source text.
    pub fn new(source: &str) -> Self {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
            trivia: Vec::new(),
        }
    }

    /// Consume the lexer, producing the full token stream plus trivia.
    pub fn tokenize(mut self) -> Result<(Vec<Token>, Vec<Trivia>), LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.is_at_end() {
                break;
            }
            tokens.push(self.scan_token()?);
        }
        let end = self.current_position();
        tokens.push(Token {
            kind: TokenKind::Eof,
            span: Span::new(end, end),
        });
        Ok((tokens, self.trivia))
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars.get(self.pos).copied().unwrap_or('\0')
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.pos];
        self.pos += 1;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }

    /// Consume the next character if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    fn token_from(&self, kind: TokenKind, start: SourcePosition) -> Token {
        Token {
            kind,
            span: Span::new(start, self.current_position()),
        }
    }

    /// Collect whitespace and comments into the trivia list.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        while !self.is_at_end() {
            let ch = self.peek();
            if ch.is_whitespace() {
                let start = self.current_position();
                let mut text = String::new();
                while !self.is_at_end() && self.peek().is_whitespace() {
                    text.push(self.advance());
                }
                self.push_trivia(TriviaKind::Whitespace, text, start);
            } else if ch == '/' && self.peek_ahead(1) == Some('/') {
                let start = self.current_position();
                let mut text = String::new();
                while !self.is_at_end() && self.peek() != '\n' {
                    text.push(self.advance());
                }
                self.push_trivia(TriviaKind::LineComment, text, start);
            } else if ch == '/' && self.peek_ahead(1) == Some('*') {
                let start = self.current_position();
                let mut text = String::new();
                text.push(self.advance()); // /
                text.push(self.advance()); // *
                let mut terminated = false;
                while !self.is_at_end() {
                    if self.peek() == '*' && self.peek_ahead(1) == Some('/') {
                        text.push(self.advance());
                        text.push(self.advance());
                        terminated = true;
                        break;
                    }
                    text.push(self.advance());
                }
                if !terminated {
                    return Err(LexError::UnterminatedComment { position: start });
                }
                self.push_trivia(TriviaKind::BlockComment, text, start);
            } else {
                break;
            }
        }
        Ok(())
    }

    fn push_trivia(&mut self, kind: TriviaKind, text: String, start: SourcePosition) {
        let span = Span::new(start, self.current_position());
        self.trivia.push(Trivia { kind, text, span });
    }

    /// Scan a single token. Trivia must already have been skipped.
    fn scan_token(&mut self) -> Result<Token, LexError> {
        let start = self.current_position();
        let ch = self.peek();

        if ch.is_ascii_digit() {
            return self.scan_number();
        }
        if is_identifier_start(ch) {
            return Ok(self.scan_identifier());
        }
        if ch == '\'' {
            return self.scan_string();
        }
        if ch == '"' {
            return self.scan_template();
        }

        self.advance();
        let punctuator = match ch {
            '(' => Punctuator::LParen,
            ')' => Punctuator::RParen,
            '{' => Punctuator::LBrace,
            '}' => Punctuator::RBrace,
            '[' => Punctuator::LBracket,
            ']' => Punctuator::RBracket,
            ';' => Punctuator::Semicolon,
            ',' => Punctuator::Comma,
            '.' => {
                // Only '.' and '...' exist; '..' is two member dots
                if self.peek() == '.' && self.peek_ahead(1) == Some('.') {
                    self.advance();
                    self.advance();
                    Punctuator::Spread
                } else {
                    Punctuator::Dot
                }
            }
            '=' => {
                if self.match_char('=') {
                    Punctuator::EqEq
                } else {
                    Punctuator::Assign
                }
            }
            '!' => {
                if self.match_char('=') {
                    Punctuator::BangEq
                } else {
                    Punctuator::Bang
                }
            }
            '~' => Punctuator::Tilde,
            '+' => Punctuator::Plus,
            '-' => Punctuator::Minus,
            '*' => {
                if self.match_char('*') {
                    Punctuator::StarStar
                } else {
                    Punctuator::Star
                }
            }
            '/' => Punctuator::Slash,
            '%' => Punctuator::Percent,
            '<' => {
                if self.match_char('<') {
                    Punctuator::Shl
                } else if self.match_char('=') {
                    Punctuator::LtEq
                } else {
                    Punctuator::Lt
                }
            }
            '>' => {
                if self.match_char('>') {
                    if self.match_char('>') {
                        Punctuator::UShr
                    } else {
                        Punctuator::Shr
                    }
                } else if self.match_char('=') {
                    Punctuator::GtEq
                } else {
                    Punctuator::Gt
                }
            }
            '&' => {
                if self.match_char('&') {
                    Punctuator::AmpAmp
                } else {
                    Punctuator::Amp
                }
            }
            '^' => Punctuator::Caret,
            '|' => {
                if self.match_char('|') {
                    Punctuator::PipePipe
                } else {
                    Punctuator::Pipe
                }
            }
            '?' => {
                // A lone '?' is not a Scribl token
                if self.match_char('?') {
                    Punctuator::Coalesce
                } else {
                    return Err(LexError::UnexpectedCharacter {
                        character: '?',
                        position: start,
                    });
                }
            }
            _ => {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    position: start,
                });
            }
        };
        Ok(self.token_from(TokenKind::Punctuator(punctuator), start))
    }

    /// Scan a numeric literal as the longest match over the full
    /// alternative set {float, hex, octal, binary, integer}.
    ///
    /// The prefixes are mutually exclusive so ties cannot occur, but
    /// the scan still measures every form from the current position
    /// rather than committing to decimal digits early. `0x` with no
    /// hex digit after it is therefore the integer `0` followed by the
    /// identifier `x`.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.current_position();
        let candidates = [
            (self.match_float(), NumberKind::Float),
            (
                self.match_radix('x', 'X', |c| c.is_ascii_hexdigit()),
                NumberKind::Hex,
            ),
            (
                self.match_radix('o', 'O', |c| ('0'..='7').contains(&c)),
                NumberKind::Octal,
            ),
            (
                self.match_radix('b', 'B', |c| c == '0' || c == '1'),
                NumberKind::Binary,
            ),
            (self.match_decimal(), NumberKind::Integer),
        ];
        let mut best_len = 0;
        let mut best_kind = NumberKind::Integer;
        for (len, kind) in candidates {
            if len > best_len {
                best_len = len;
                best_kind = kind;
            }
        }
        debug_assert!(best_len > 0, "scan_number called off a digit");

        let mut raw = String::with_capacity(best_len);
        for _ in 0..best_len {
            raw.push(self.advance());
        }
        Ok(self.token_from(
            TokenKind::Number {
                kind: best_kind,
                raw,
            },
            start,
        ))
    }

    /// Length of a `\d+` match at the current position, or 0.
    fn match_decimal(&self) -> usize {
        let mut len = 0;
        while matches!(self.peek_ahead(len), Some(c) if c.is_ascii_digit()) {
            len += 1;
        }
        len
    }

    /// Length of a `\d+\.\d*` match at the current position, or 0.
    fn match_float(&self) -> usize {
        let digits = self.match_decimal();
        if digits == 0 || self.peek_ahead(digits) != Some('.') {
            return 0;
        }
        let mut len = digits + 1;
        while matches!(self.peek_ahead(len), Some(c) if c.is_ascii_digit()) {
            len += 1;
        }
        len
    }

    /// Length of a `0[pP]digit+` match (for prefix letters `p`/`P` and
    /// a digit predicate) at the current position, or 0.
    fn match_radix(&self, lower: char, upper: char, is_digit: fn(char) -> bool) -> usize {
        if self.peek_ahead(0) != Some('0') {
            return 0;
        }
        match self.peek_ahead(1) {
            Some(c) if c == lower || c == upper => {}
            _ => return 0,
        }
        let mut len = 2;
        while matches!(self.peek_ahead(len), Some(c) if is_digit(c)) {
            len += 1;
        }
        if len == 2 {
            // Prefix with no digits is not a match
            0
        } else {
            len
        }
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.current_position();
        let mut name = String::new();
        name.push(self.advance());
        while !self.is_at_end() && is_identifier_continue(self.peek()) {
            name.push(self.advance());
        }
        let kind = match name.as_str() {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "void" => TokenKind::Void,
            _ => TokenKind::Identifier(name),
        };
        self.token_from(kind, start)
    }

    /// Scan a single-quoted string. No escape sequences; a newline or
    /// end of input before the closing quote is an error.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.current_position();
        self.advance(); // opening '
        let mut value = String::new();
        loop {
            if self.is_at_end() || self.peek() == '\n' {
                return Err(LexError::UnterminatedString { position: start });
            }
            let ch = self.advance();
            if ch == '\'' {
                break;
            }
            value.push(ch);
        }
        Ok(self.token_from(TokenKind::Str(value), start))
    }

    /// Scan a double-quoted template string into chunks and
    /// interpolations. Interpolation bodies are tokenized recursively,
    /// so nested templates work to arbitrary depth.
    fn scan_template(&mut self) -> Result<Token, LexError> {
        let start = self.current_position();
        self.advance(); // opening "
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut chunk_start = self.current_position();
        loop {
            if self.is_at_end() || self.peek() == '\n' {
                return Err(LexError::UnterminatedTemplate { position: start });
            }
            if self.peek() == '"' {
                self.flush_chunk(&mut segments, &mut text, chunk_start);
                self.advance();
                break;
            }
            if self.peek() == '$' && self.peek_ahead(1) == Some('{') {
                self.flush_chunk(&mut segments, &mut text, chunk_start);
                segments.push(self.scan_interpolation(start)?);
                chunk_start = self.current_position();
            } else {
                // Includes a literal '$' not followed by '{'
                text.push(self.advance());
            }
        }
        Ok(self.token_from(TokenKind::Template(segments), start))
    }

    fn flush_chunk(
        &self,
        segments: &mut Vec<TemplateSegment>,
        text: &mut String,
        chunk_start: SourcePosition,
    ) {
        if !text.is_empty() {
            segments.push(TemplateSegment::Chunk {
                text: std::mem::take(text),
                span: Span::new(chunk_start, self.current_position()),
            });
        }
    }

    /// Scan the `${ ... }` following the current position into a
    /// nested sub-token stream. Braces inside the interpolation (for
    /// example an explicit block) are balanced against the closing one.
    fn scan_interpolation(&mut self, template_start: SourcePosition) -> Result<TemplateSegment, LexError> {
        let start = self.current_position();
        self.advance(); // $
        self.advance(); // {
        let mut tokens = Vec::new();
        let mut brace_depth = 0usize;
        loop {
            self.skip_trivia()?;
            if self.is_at_end() {
                return Err(LexError::UnterminatedTemplate {
                    position: template_start,
                });
            }
            if self.peek() == '}' && brace_depth == 0 {
                let end = self.current_position();
                self.advance();
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    span: Span::new(end, end),
                });
                return Ok(TemplateSegment::Interpolation {
                    tokens,
                    span: Span::new(start, self.current_position()),
                });
            }
            let token = self.scan_token()?;
            match token.kind {
                TokenKind::Punctuator(Punctuator::LBrace) => brace_depth += 1,
                TokenKind::Punctuator(Punctuator::RBrace) => brace_depth -= 1,
                _ => {}
            }
            tokens.push(token);
        }
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
