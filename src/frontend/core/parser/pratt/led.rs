//! Postfix expression parsing (led - left denotation)
//!
//! Extends an operand with selectors, calls, indexing and one-liner
//! conditionals, and turns an assignable primary followed by an assignment
//! operator into an assign statement.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::ParseError;

impl<I: TokenStream> ParserState<I> {
    /// Operand followed by any number of postfix extensions
    pub fn parse_primary_expression(&mut self) -> Result<Node, ParseError> {
        let mut primary = match self.parse_operand()? {
            Node::Expression(expression) => expression,
            statement => return Ok(statement),
        };

        loop {
            let token = self.current();
            primary = match (token.kind, token.value) {
                (TokenKind::Punctuation, DirectValue::Dot) => self.parse_selector(primary)?,
                (TokenKind::Punctuation, DirectValue::OpenParentheses) => {
                    self.parse_invocation(primary)?
                }
                (TokenKind::Punctuation, DirectValue::OpenSquareBracket) => {
                    self.parse_index(primary)?
                }
                (TokenKind::Keyword, DirectValue::If) => {
                    Expression::IfOneLiner(self.parse_one_liner(primary, Construct::IfOneLiner)?)
                }
                (TokenKind::Keyword, DirectValue::Unless) => Expression::UnlessOneLiner(
                    self.parse_one_liner(primary, Construct::UnlessOneLiner)?,
                ),
                _ => break,
            };
        }

        if self.at_kind(TokenKind::Assignment) {
            return Ok(self.parse_assign(primary)?.into());
        }

        Ok(primary.into())
    }

    /// `receiver.identifier`
    fn parse_selector(
        &mut self,
        receiver: Expression,
    ) -> Result<Expression, ParseError> {
        self.bump()?; // consume '.'
        let identifier = Identifier::new(self.expect_identifier(Construct::Selector)?);
        Ok(Expression::Selector {
            receiver: Box::new(receiver),
            identifier,
        })
    }

    /// `callee(arg, ...)`
    fn parse_invocation(
        &mut self,
        callee: Expression,
    ) -> Result<Expression, ParseError> {
        self.within(Construct::MethodInvocation, |state| {
            state.bump()?; // consume '('
            let arguments = state
                .parse_expression_list(DirectValue::CloseParentheses, Construct::MethodInvocation)?;
            Ok(Expression::MethodInvocation {
                callee: Box::new(callee),
                arguments,
            })
        })
    }

    /// `receiver[index]` or the slice forms `receiver[lo:hi]`, `[:hi]`, `[lo:]`, `[:]`
    fn parse_index(
        &mut self,
        receiver: Expression,
    ) -> Result<Expression, ParseError> {
        self.within(Construct::Index, |state| {
            state.bump()?; // consume '['
            state.skip_newlines()?;

            let low = if state.at(DirectValue::Colon) {
                None
            } else {
                Some(state.parse_expression(Construct::Index)?)
            };
            state.skip_newlines()?;

            let index = if state.at(DirectValue::Colon) {
                let colon = state.bump()?;
                state.skip_newlines()?;
                let high = if state.at(DirectValue::CloseSquareBracket) {
                    None
                } else {
                    Some(state.parse_expression(Construct::Index)?)
                };
                state.skip_newlines()?;

                let at = colon.position();
                Expression::Tuple(vec![
                    low.unwrap_or_else(|| none_literal(at)),
                    high.unwrap_or_else(|| none_literal(at)),
                ])
            } else {
                match low {
                    Some(index) => index,
                    None => return Err(state.syntax_error(Construct::Index)),
                }
            };

            state.expect_closing(DirectValue::CloseSquareBracket, Construct::Index)?;
            Ok(Expression::Index {
                receiver: Box::new(receiver),
                index: Box::new(index),
            })
        })
    }

    /// `result if condition [else other]`, the keyword is the current token
    fn parse_one_liner(
        &mut self,
        result: Expression,
        construct: Construct,
    ) -> Result<OneLiner, ParseError> {
        self.within(construct, |state| {
            state.bump()?; // consume 'if' / 'unless'
            let condition = state.parse_expression(construct)?;
            let else_result = if state.at_keyword(DirectValue::Else) {
                state.bump()?;
                Some(Box::new(state.parse_expression(construct)?))
            } else {
                None
            };

            Ok(OneLiner {
                result: Box::new(result),
                condition: Box::new(condition),
                else_result,
            })
        })
    }

    /// `target op= value` for any assignment operator
    fn parse_assign(
        &mut self,
        left: Expression,
    ) -> Result<Statement, ParseError> {
        if !left.is_assignable() {
            return Err(self.syntax_error(Construct::Assign));
        }

        self.within(Construct::Assign, |state| {
            let operator = state.bump()?;
            state.skip_newlines()?;
            let right = state.parse_expression(Construct::Assign)?;
            Ok(Statement::Assign {
                left,
                operator,
                right,
            })
        })
    }
}

/// Absent slice bound
fn none_literal(at: crate::util::span::Position) -> Expression {
    Expression::BasicLiteral(Token::synthetic(
        "None",
        TokenKind::NoneType,
        DirectValue::None,
        at,
    ))
}
