//! Token types

use crate::util::span::{Position, Span};
use std::fmt;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error("Invalid number literal '{literal}' at {position}")]
    InvalidNumber { literal: String, position: Position },
    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("Token at {position} is not valid UTF-8")]
    InvalidUtf8 { position: Position },
    #[error("Advanced past the end of input at index {index}")]
    OutOfInput { index: usize },
}

impl LexError {
    /// Position the failing token started at, when known
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::UnterminatedString { position }
            | LexError::InvalidNumber { position, .. }
            | LexError::UnexpectedChar { position, .. }
            | LexError::InvalidUtf8 { position } => Some(*position),
            LexError::OutOfInput { .. } => None,
        }
    }
}

/// Coarse token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Comment,
    Whitespace,
    Tab,
    Literal,
    Identifier,
    Separator,
    Punctuation,
    Assignment,
    Comparator,
    Operator,
    Keyword,
    Boolean,
    NoneType,
    Eof,
}

/// Fine-grained token discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectValue {
    Blank,
    InvalidDirectValue,
    NewLine,

    // Literals
    SingleQuoteString,
    DoubleQuoteString,
    ByteString,
    Integer,
    HexadecimalInteger,
    OctalInteger,
    BinaryInteger,
    Float,
    ScientificFloat,
    CommandOutput,

    // Punctuation
    Comma,
    Colon,
    Semicolon,
    Dot,
    OpenParentheses,
    CloseParentheses,
    OpenSquareBracket,
    CloseSquareBracket,
    OpenBrace,
    CloseBrace,

    // Assignment
    Assign,
    AddAssign,
    SubAssign,
    StarAssign,
    DivAssign,
    FloorDivAssign,
    PowerOfAssign,
    ModulusAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
    BitwiseAndAssign,
    BitwiseLeftAssign,
    BitwiseRightAssign,

    // Comparators
    Equals,
    NotEqual,
    LessThan,
    LessOrEqualThan,
    GreaterThan,
    GreaterOrEqualThan,
    In,
    And,
    Or,
    Xor,
    Not,
    As,

    // Operators
    Add,
    Sub,
    Star,
    Div,
    FloorDiv,
    PowerOf,
    Modulus,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    BitwiseLeft,
    BitwiseRight,
    NegateBits,
    SignNot,

    // Keywords
    Pass,
    Super,
    End,
    If,
    Unless,
    Else,
    Elif,
    While,
    Do,
    For,
    Until,
    Switch,
    Case,
    Default,
    Yield,
    Return,
    Continue,
    Break,
    Redo,
    Module,
    Def,
    Lambda,
    Interface,
    Class,
    Try,
    Except,
    Finally,
    BEGIN,
    END,
    Raise,
    Require,
    Delete,
    Generator,

    // Constants
    True,
    False,
    None,
}

impl DirectValue {
    /// Whether the value names an integer literal in any base
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            DirectValue::Integer
                | DirectValue::HexadecimalInteger
                | DirectValue::OctalInteger
                | DirectValue::BinaryInteger
        )
    }

    /// Whether the value names a float literal
    pub fn is_float(self) -> bool {
        matches!(self, DirectValue::Float | DirectValue::ScientificFloat)
    }

    /// Whether the value names a quoted text literal
    pub fn is_string(self) -> bool {
        matches!(
            self,
            DirectValue::SingleQuoteString
                | DirectValue::DoubleQuoteString
                | DirectValue::ByteString
                | DirectValue::CommandOutput
        )
    }
}

/// Token
///
/// Equality compares text, kind and direct value; the span is ignored.
#[derive(Debug, Clone)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub value: DirectValue,
    pub span: Span,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        kind: TokenKind,
        value: DirectValue,
        span: Span,
    ) -> Self {
        Self {
            text: text.into(),
            kind,
            value,
            span,
        }
    }

    /// Token synthesized by a later stage, positioned at `at`
    pub fn synthetic(
        text: &str,
        kind: TokenKind,
        value: DirectValue,
        at: Position,
    ) -> Self {
        Self::new(text, kind, value, Span::point(at))
    }

    /// End-of-input sentinel
    pub fn eof(at: Position) -> Self {
        Self::synthetic("", TokenKind::Eof, DirectValue::Blank, at)
    }

    pub fn position(&self) -> Position {
        self.span.start
    }

    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }

    pub fn index(&self) -> usize {
        self.span.start.offset
    }

    pub fn is(
        &self,
        kind: TokenKind,
        value: DirectValue,
    ) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }
}

impl PartialEq for Token {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.text == other.text && self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}
