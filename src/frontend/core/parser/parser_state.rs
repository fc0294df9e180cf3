//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::{Expression, Node};
use crate::frontend::core::parser::BP_LOWEST;
use crate::util::span::Position;
use std::fmt;

/// Any lazily produced token stream the parser can pull from
pub trait TokenStream: Iterator<Item = Result<Token, LexError>> {}

impl<T: Iterator<Item = Result<Token, LexError>>> TokenStream for T {}

/// Syntactic construct a parse error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    Program,
    Expression,
    Assign,
    Unary,
    Binary,
    Selector,
    MethodInvocation,
    Index,
    Parentheses,
    Tuple,
    Array,
    Hash,
    Lambda,
    Generator,
    IfOneLiner,
    UnlessOneLiner,
    Super,
    Require,
    Delete,
    Raise,
    Return,
    Yield,
    If,
    Unless,
    Switch,
    While,
    Until,
    DoWhile,
    For,
    Module,
    FunctionDefinition,
    GeneratorDefinition,
    Interface,
    Class,
    Try,
    Begin,
    End,
}

impl fmt::Display for Construct {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Parse error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("{construct}: syntax error at {position}, found '{found}'")]
    SyntaxError {
        construct: Construct,
        found: String,
        position: Position,
    },
    #[error("{construct}: expecting an expression at {position}")]
    ExpectingExpression {
        construct: Construct,
        position: Position,
    },
    #[error("Interface: expecting a function definition at {position}")]
    ExpectingFunctionDefinition { position: Position },
    #[error("{construct}: statement never ended, input ran out at {position}")]
    StatementNeverEnded {
        construct: Construct,
        position: Position,
    },
    #[error("{construct}: expression never closed, input ran out at {position}")]
    ExpressionNeverClosed {
        construct: Construct,
        position: Position,
    },
    #[error("BEGIN block repeated at {position}")]
    BeginRepeated { position: Position },
    #[error("END block repeated at {position}")]
    EndRepeated { position: Position },
    #[error("Unknown token '{found}' ({kind:?}) at {position}")]
    UnknownToken {
        found: String,
        kind: TokenKind,
        position: Position,
    },
    #[error("Token '{found}' at {position} is not a literal")]
    InvalidTokenKind { found: String, position: Position },
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl ParseError {
    /// Construct tag, for errors attributed to one
    pub fn construct(&self) -> Option<Construct> {
        match self {
            ParseError::SyntaxError { construct, .. }
            | ParseError::ExpectingExpression { construct, .. }
            | ParseError::StatementNeverEnded { construct, .. }
            | ParseError::ExpressionNeverClosed { construct, .. } => Some(*construct),
            ParseError::ExpectingFunctionDefinition { .. } => Some(Construct::Interface),
            ParseError::BeginRepeated { .. } => Some(Construct::Begin),
            ParseError::EndRepeated { .. } => Some(Construct::End),
            _ => None,
        }
    }

    /// Source position of the offending token
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::SyntaxError { position, .. }
            | ParseError::ExpectingExpression { position, .. }
            | ParseError::ExpectingFunctionDefinition { position }
            | ParseError::StatementNeverEnded { position, .. }
            | ParseError::ExpressionNeverClosed { position, .. }
            | ParseError::BeginRepeated { position }
            | ParseError::EndRepeated { position }
            | ParseError::UnknownToken { position, .. }
            | ParseError::InvalidTokenKind { position, .. } => Some(*position),
            ParseError::Lex(err) => err.position(),
        }
    }
}

/// Parser state for Pratt parsing
///
/// One token of lookahead, no backtracking.
pub struct ParserState<I: TokenStream> {
    tokens: I,
    current: Token,
    complete: bool,
    /// Constructs being parsed, innermost last
    stack: Vec<Construct>,
}

impl<I: TokenStream> ParserState<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            current: Token::synthetic(
                "",
                TokenKind::Unknown,
                DirectValue::Blank,
                Position::dummy(),
            ),
            complete: false,
            stack: Vec::new(),
        }
    }

    /// Pull the next token into the lookahead slot
    pub fn next(&mut self) -> Result<(), ParseError> {
        if self.complete {
            return Ok(());
        }
        match self.tokens.next() {
            Some(Ok(token)) => {
                self.complete = token.is_eof();
                self.current = token;
            }
            Some(Err(err)) => return Err(err.into()),
            None => {
                self.complete = true;
                self.current = Token::eof(self.current.span.end);
            }
        }
        Ok(())
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn position(&self) -> Position {
        self.current.position()
    }

    /// Take the current token and advance
    pub fn bump(&mut self) -> Result<Token, ParseError> {
        let token = self.current.clone();
        self.next()?;
        Ok(token)
    }

    pub fn at_end(&self) -> bool {
        self.current.is_eof()
    }

    pub fn at(
        &self,
        value: DirectValue,
    ) -> bool {
        self.current.value == value
    }

    pub fn at_kind(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.current.kind == kind
    }

    pub fn at_keyword(
        &self,
        value: DirectValue,
    ) -> bool {
        self.current.is(TokenKind::Keyword, value)
    }

    pub fn at_newline(&self) -> bool {
        self.current.is(TokenKind::Separator, DirectValue::NewLine)
    }

    pub fn at_separator(&self) -> bool {
        self.current.is_separator()
    }

    pub fn skip_newlines(&mut self) -> Result<(), ParseError> {
        while self.at_newline() {
            self.next()?;
        }
        Ok(())
    }

    pub fn skip_separators(&mut self) -> Result<(), ParseError> {
        while self.at_separator() {
            self.next()?;
        }
        Ok(())
    }

    /// Consume a token with the given direct value
    pub fn expect(
        &mut self,
        value: DirectValue,
        construct: Construct,
    ) -> Result<Token, ParseError> {
        if self.at(value) {
            self.bump()
        } else if self.at_end() {
            Err(self.never_ended(construct))
        } else {
            Err(self.syntax_error(construct))
        }
    }

    /// Consume a closing punctuator
    pub fn expect_closing(
        &mut self,
        value: DirectValue,
        construct: Construct,
    ) -> Result<Token, ParseError> {
        if self.at(value) {
            self.bump()
        } else if self.at_end() {
            Err(self.never_closed(construct))
        } else {
            Err(self.syntax_error(construct))
        }
    }

    /// Statement headers end with a newline before their body
    pub fn expect_newline(
        &mut self,
        construct: Construct,
    ) -> Result<(), ParseError> {
        if self.at_newline() {
            self.next()
        } else if self.at_end() {
            Err(self.never_ended(construct))
        } else {
            Err(self.syntax_error(construct))
        }
    }

    pub fn expect_identifier(
        &mut self,
        construct: Construct,
    ) -> Result<Token, ParseError> {
        if self.at_kind(TokenKind::Identifier) {
            self.bump()
        } else if self.at_end() {
            Err(self.never_ended(construct))
        } else {
            Err(self.syntax_error(construct))
        }
    }

    /// Parse a full expression; statements in this slot are rejected
    pub fn parse_expression(
        &mut self,
        construct: Construct,
    ) -> Result<Expression, ParseError> {
        let position = self.position();
        match self.parse_binary_expression(BP_LOWEST)? {
            Node::Expression(expression) => Ok(expression),
            Node::Statement(_) => Err(self.fail(ParseError::ExpectingExpression {
                construct,
                position,
            })),
        }
    }

    pub fn syntax_error(
        &self,
        construct: Construct,
    ) -> ParseError {
        self.fail(ParseError::SyntaxError {
            construct,
            found: self.current.text.clone(),
            position: self.position(),
        })
    }

    pub fn never_ended(
        &self,
        construct: Construct,
    ) -> ParseError {
        self.fail(ParseError::StatementNeverEnded {
            construct,
            position: self.position(),
        })
    }

    pub fn never_closed(
        &self,
        construct: Construct,
    ) -> ParseError {
        self.fail(ParseError::ExpressionNeverClosed {
            construct,
            position: self.position(),
        })
    }

    /// Log an error with the constructs that were open when it happened
    pub fn fail(
        &self,
        error: ParseError,
    ) -> ParseError {
        tracing::debug!(context = ?self.stack, "parse error: {}", error);
        error
    }

    /// Run `parse` with `construct` pushed on the bookkeeping stack
    pub fn within<T>(
        &mut self,
        construct: Construct,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.stack.push(construct);
        let result = parse(self);
        self.stack.pop();
        result
    }

    /// Constructs currently being parsed, innermost last
    pub fn context(&self) -> &[Construct] {
        &self.stack
    }
}
