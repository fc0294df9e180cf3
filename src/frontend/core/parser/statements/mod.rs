//! Statement parsing modules
//! Contains specialized modules for different statement types

pub mod blocks;
pub mod control_flow;
pub mod declarations;

// Re-export commonly used items
pub use blocks::*;
pub use control_flow::*;
pub use declarations::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{ParserState, TokenStream};
use crate::frontend::core::parser::ParseError;

/// Statement parsing for keyword-led statements
pub trait StatementParser {
    /// Parse the statement the current keyword opens, `None` if it opens none
    fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError>;
}

impl<I: TokenStream> StatementParser for ParserState<I> {
    fn parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        if !self.at_kind(TokenKind::Keyword) {
            return Ok(None);
        }

        let statement = match self.current().value {
            DirectValue::If => control_flow::parse_if_stmt(self)?,
            DirectValue::Unless => control_flow::parse_unless_stmt(self)?,
            DirectValue::While => control_flow::parse_while_stmt(self)?,
            DirectValue::Until => control_flow::parse_until_stmt(self)?,
            DirectValue::Do => control_flow::parse_do_while_stmt(self)?,
            DirectValue::For => control_flow::parse_for_stmt(self)?,
            DirectValue::Switch => control_flow::parse_switch_stmt(self)?,
            DirectValue::Try => control_flow::parse_try_stmt(self)?,
            DirectValue::Return => Statement::Return(control_flow::parse_results(self)?),
            DirectValue::Yield => Statement::Yield(control_flow::parse_results(self)?),
            DirectValue::Raise => control_flow::parse_raise_stmt(self)?,
            DirectValue::Continue => control_flow::parse_jump_stmt(self, Statement::Continue)?,
            DirectValue::Break => control_flow::parse_jump_stmt(self, Statement::Break)?,
            DirectValue::Redo => control_flow::parse_jump_stmt(self, Statement::Redo)?,
            DirectValue::Pass => control_flow::parse_jump_stmt(self, Statement::Pass)?,
            DirectValue::Module => declarations::parse_module_stmt(self)?,
            DirectValue::Def => {
                Statement::FunctionDefinition(declarations::parse_function_def(self)?)
            }
            DirectValue::Generator => {
                Statement::GeneratorDefinition(declarations::parse_function_def(self)?)
            }
            DirectValue::Interface => declarations::parse_interface_stmt(self)?,
            DirectValue::Class => declarations::parse_class_stmt(self)?,
            _ => return Ok(None),
        };

        Ok(Some(statement))
    }
}
