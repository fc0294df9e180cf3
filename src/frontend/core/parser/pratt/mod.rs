//! Pratt parser implementation
//! Handles expression parsing with binding power

pub mod led;
pub mod nud;
pub mod precedence;

pub use precedence::*;

use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::ParseError;

impl<I: TokenStream> ParserState<I> {
    /// Precedence climbing over binary operators
    ///
    /// Statements produced by the operand parser are returned untouched, which
    /// is how block bodies reuse this entry point.
    pub fn parse_binary_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<Node, ParseError> {
        let mut left = match self.parse_unary_expression()? {
            Node::Expression(expression) => expression,
            statement => return Ok(statement),
        };

        while let Some(bp) = binary_precedence(self.current()) {
            if bp < min_bp {
                break;
            }
            let operator = self.bump()?;
            self.skip_newlines()?;

            let position = self.position();
            let right = match self.parse_binary_expression(bp + 1)? {
                Node::Expression(expression) => expression,
                Node::Statement(_) => {
                    return Err(self.fail(ParseError::ExpectingExpression {
                        construct: Construct::Binary,
                        position,
                    }))
                }
            };

            left = Expression::Binary {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            };
        }

        Ok(Node::Expression(left))
    }
}
