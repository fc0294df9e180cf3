//! Parser module
//!
//! Pratt parser turning a token stream into the rich syntax tree. Tokens are
//! pulled lazily with one token of lookahead; the first malformed construct
//! aborts the parse.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
pub mod tests;
pub mod visit;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{Construct, ParseError, ParserState, TokenStream};
pub use pratt::*;
pub use statements::StatementParser;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::lexer::{lex, LexError};
use statements::blocks::{parse_begin_stmt, parse_end_stmt};

/// Parse a token sequence into a program
///
/// The sequence does not need to end with an EOF token.
pub fn parse<T: IntoIterator<Item = Token>>(tokens: T) -> Result<Program, ParseError> {
    parse_stream(tokens.into_iter().map(Ok::<Token, LexError>))
}

/// Tokenize and parse source text in one pass
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse_stream(lex(source))
}

/// Parse a lazily produced token stream into a program
pub fn parse_stream<I: TokenStream>(tokens: I) -> Result<Program, ParseError> {
    let mut state = ParserState::new(tokens);
    state.next()?;

    let program = state.within(Construct::Program, parse_program)?;
    tracing::debug!(
        nodes = program.body.len(),
        begin = program.begin.is_some(),
        end = program.end.is_some(),
        "parsed program"
    );
    Ok(program)
}

/// Parse a single expression from source text
///
/// Trailing newlines are allowed, anything else after the expression is a
/// syntax error.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    let mut state = ParserState::new(lex(source));
    state.next()?;
    state.skip_newlines()?;

    let expression = state.parse_expression(Construct::Expression)?;
    state.skip_separators()?;
    if !state.at_end() {
        return Err(state.syntax_error(Construct::Expression));
    }
    Ok(expression)
}

fn parse_program<I: TokenStream>(state: &mut ParserState<I>) -> Result<Program, ParseError> {
    let mut program = Program::default();

    loop {
        state.skip_separators()?;
        if state.at_end() {
            return Ok(program);
        }

        if state.at_keyword(DirectValue::BEGIN) {
            if program.begin.is_some() {
                return Err(state.fail(ParseError::BeginRepeated {
                    position: state.position(),
                }));
            }
            program.begin = Some(parse_begin_stmt(state)?);
        } else if state.at_keyword(DirectValue::END) {
            if program.end.is_some() {
                return Err(state.fail(ParseError::EndRepeated {
                    position: state.position(),
                }));
            }
            program.end = Some(parse_end_stmt(state)?);
        } else {
            let node = state.parse_binary_expression(BP_LOWEST)?;
            program.body.push(node);
        }

        if !state.at_separator() && !state.at_end() {
            return Err(state.syntax_error(Construct::Program));
        }
    }
}
