//! Prefix expression parsing (nud - null denotation)
//!
//! Unary operators, literals, identifiers, bracketed forms and every
//! keyword that may open a node.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::pratt::precedence::is_unary_operator;
use crate::frontend::core::parser::statements::StatementParser;
use crate::frontend::core::parser::ParseError;

impl<I: TokenStream> ParserState<I> {
    /// Parse unary operator expression, or fall through to a primary
    pub fn parse_unary_expression(&mut self) -> Result<Node, ParseError> {
        if !is_unary_operator(self.current()) {
            return self.parse_primary_expression();
        }

        let operator = self.bump()?;
        let position = self.position();
        match self.parse_unary_expression()? {
            Node::Expression(operand) => Ok(Expression::Unary {
                operator,
                operand: Box::new(operand),
            }
            .into()),
            Node::Statement(_) => Err(self.fail(ParseError::ExpectingExpression {
                construct: Construct::Unary,
                position,
            })),
        }
    }

    /// Parse the node a primary expression starts with
    pub fn parse_operand(&mut self) -> Result<Node, ParseError> {
        let token = self.current().clone();
        match token.kind {
            TokenKind::Identifier => {
                self.next()?;
                Ok(Expression::Identifier(Identifier::new(token)).into())
            }
            TokenKind::Literal | TokenKind::Boolean | TokenKind::NoneType => {
                Ok(self.parse_literal()?.into())
            }
            TokenKind::Punctuation => match token.value {
                DirectValue::OpenParentheses => Ok(self.parse_parentheses()?.into()),
                DirectValue::OpenSquareBracket => Ok(self.parse_array()?.into()),
                DirectValue::OpenBrace => Ok(self.parse_hash()?.into()),
                _ => Err(self.unknown_token()),
            },
            TokenKind::Keyword => self.parse_keyword(token.value),
            TokenKind::Eof => Err(self.never_ended(Construct::Expression)),
            _ => Err(self.unknown_token()),
        }
    }

    /// Dispatch on a keyword in operand position
    fn parse_keyword(
        &mut self,
        keyword: DirectValue,
    ) -> Result<Node, ParseError> {
        match keyword {
            DirectValue::Lambda => Ok(self.parse_lambda()?.into()),
            DirectValue::Super => Ok(self.parse_super()?.into()),
            DirectValue::Require => Ok(self.parse_require()?.into()),
            DirectValue::Delete => Ok(self.parse_delete()?.into()),
            // Only valid at the top level of a program
            DirectValue::BEGIN => Err(self.syntax_error(Construct::Begin)),
            DirectValue::END => Err(self.syntax_error(Construct::End)),
            _ => match self.parse_statement()? {
                Some(statement) => Ok(statement.into()),
                None => Err(self.unknown_token()),
            },
        }
    }

    fn unknown_token(&self) -> ParseError {
        let token = self.current();
        self.fail(ParseError::UnknownToken {
            found: token.text.clone(),
            kind: token.kind,
            position: token.position(),
        })
    }

    /// Parse a literal token (numbers, strings, `True`, `False`, `None`)
    pub fn parse_literal(&mut self) -> Result<Expression, ParseError> {
        let token = self.current();
        if !matches!(
            token.kind,
            TokenKind::Literal | TokenKind::Boolean | TokenKind::NoneType
        ) {
            return Err(self.fail(ParseError::InvalidTokenKind {
                found: token.text.clone(),
                position: token.position(),
            }));
        }
        Ok(Expression::BasicLiteral(self.bump()?))
    }

    /// Parenthesized expression, tuple or generator expression
    fn parse_parentheses(&mut self) -> Result<Expression, ParseError> {
        self.within(Construct::Parentheses, |state| {
            state.bump()?; // consume '('
            state.skip_newlines()?;

            if state.at(DirectValue::CloseParentheses) {
                // Zero-length tuples are rejected
                return Err(state.syntax_error(Construct::Tuple));
            }

            let first = state.parse_expression(Construct::Parentheses)?;
            state.skip_newlines()?;

            if state.at_keyword(DirectValue::For) {
                return state.parse_generator_tail(first);
            }

            if state.at(DirectValue::Comma) {
                let mut values = vec![first];
                while state.at(DirectValue::Comma) {
                    state.bump()?;
                    state.skip_newlines()?;
                    if state.at(DirectValue::CloseParentheses) {
                        break;
                    }
                    values.push(state.parse_expression(Construct::Tuple)?);
                    state.skip_newlines()?;
                }
                state.expect_closing(DirectValue::CloseParentheses, Construct::Tuple)?;
                return Ok(Expression::Tuple(values));
            }

            state.expect_closing(DirectValue::CloseParentheses, Construct::Parentheses)?;
            Ok(Expression::Parentheses(Box::new(first)))
        })
    }

    /// `for r1, r2 in source)` after the generator operation
    fn parse_generator_tail(
        &mut self,
        operation: Expression,
    ) -> Result<Expression, ParseError> {
        self.bump()?; // consume 'for'
        let receivers = self.parse_receivers(Construct::Generator)?;
        self.expect(DirectValue::In, Construct::Generator)?;
        self.skip_newlines()?;
        let source = self.parse_expression(Construct::Generator)?;
        self.skip_newlines()?;
        self.expect_closing(DirectValue::CloseParentheses, Construct::Generator)?;

        Ok(Expression::Generator {
            operation: Box::new(operation),
            receivers,
            source: Box::new(source),
        })
    }

    /// Array literal: `[a, b, c]`
    fn parse_array(&mut self) -> Result<Expression, ParseError> {
        self.within(Construct::Array, |state| {
            state.bump()?; // consume '['
            let values =
                state.parse_expression_list(DirectValue::CloseSquareBracket, Construct::Array)?;
            Ok(Expression::Array(values))
        })
    }

    /// Hash literal: `{key: value, ...}`
    fn parse_hash(&mut self) -> Result<Expression, ParseError> {
        self.within(Construct::Hash, |state| {
            state.bump()?; // consume '{'
            let mut entries = Vec::new();

            loop {
                state.skip_newlines()?;
                if state.at(DirectValue::CloseBrace) {
                    state.bump()?;
                    break;
                }

                let key = state.parse_expression(Construct::Hash)?;
                state.skip_newlines()?;
                state.expect_closing(DirectValue::Colon, Construct::Hash)?;
                state.skip_newlines()?;
                let value = state.parse_expression(Construct::Hash)?;
                entries.push(KeyValue { key, value });
                state.skip_newlines()?;

                if state.at(DirectValue::Comma) {
                    state.bump()?;
                } else {
                    state.expect_closing(DirectValue::CloseBrace, Construct::Hash)?;
                    break;
                }
            }

            Ok(Expression::Hash(entries))
        })
    }

    /// Lambda: `lambda a, b: result`
    fn parse_lambda(&mut self) -> Result<Expression, ParseError> {
        self.within(Construct::Lambda, |state| {
            state.bump()?; // consume 'lambda'
            let arguments = if state.at(DirectValue::Colon) {
                Vec::new()
            } else {
                state.parse_receivers(Construct::Lambda)?
            };
            state.expect(DirectValue::Colon, Construct::Lambda)?;
            let result = state.parse_expression(Construct::Lambda)?;

            Ok(Expression::Lambda {
                arguments,
                result: Box::new(result),
            })
        })
    }

    /// `super` followed by a bare operand, e.g. `super(a, b)`
    fn parse_super(&mut self) -> Result<Expression, ParseError> {
        self.bump()?; // consume 'super'
        let position = self.position();
        match self.parse_operand()? {
            Node::Expression(expression) => Ok(Expression::Super(Box::new(expression))),
            Node::Statement(_) => Err(self.fail(ParseError::ExpectingExpression {
                construct: Construct::Super,
                position,
            })),
        }
    }

    /// `require module`
    fn parse_require(&mut self) -> Result<Expression, ParseError> {
        self.bump()?; // consume 'require'
        let module = self.parse_expression(Construct::Require)?;
        Ok(Expression::Require(Box::new(module)))
    }

    /// `delete target`, the target must be assignable
    fn parse_delete(&mut self) -> Result<Expression, ParseError> {
        self.bump()?; // consume 'delete'
        let start = self.current().clone();
        let target = self.parse_expression(Construct::Delete)?;
        if !target.is_assignable() {
            let position = start.position();
            return Err(self.fail(ParseError::SyntaxError {
                construct: Construct::Delete,
                found: start.text,
                position,
            }));
        }
        Ok(Expression::Delete(Box::new(target)))
    }

    /// Comma separated expressions up to `closing`; the opener is consumed
    ///
    /// Newlines and a trailing comma are allowed.
    pub fn parse_expression_list(
        &mut self,
        closing: DirectValue,
        construct: Construct,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut values = Vec::new();

        loop {
            self.skip_newlines()?;
            if self.at(closing) {
                self.bump()?;
                break;
            }

            values.push(self.parse_expression(construct)?);
            self.skip_newlines()?;

            if self.at(DirectValue::Comma) {
                self.bump()?;
            } else {
                self.expect_closing(closing, construct)?;
                break;
            }
        }

        Ok(values)
    }

    /// One or more comma separated identifiers
    pub fn parse_receivers(
        &mut self,
        construct: Construct,
    ) -> Result<Vec<Identifier>, ParseError> {
        let mut receivers = vec![Identifier::new(self.expect_identifier(construct)?)];
        while self.at(DirectValue::Comma) {
            self.bump()?;
            receivers.push(Identifier::new(self.expect_identifier(construct)?));
        }
        Ok(receivers)
    }
}
