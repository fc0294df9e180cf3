//! Block body parsing
//!
//! A body is a run of nodes separated by newlines or `;`, closed by one of a
//! fixed set of keywords. The closing keyword is consumed and reported so the
//! caller can continue with `elif`, `except`, `case` and the like.

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::{ParseError, BP_LOWEST};

/// Parse nodes until one of `terminators` opens a line
pub fn parse_body<I: TokenStream>(
    state: &mut ParserState<I>,
    construct: Construct,
    terminators: &[DirectValue],
) -> Result<(Vec<Node>, DirectValue), ParseError> {
    state.within(construct, |state| {
        let mut body = Vec::new();

        loop {
            state.skip_separators()?;

            if let Some(terminator) = at_terminator(state, terminators) {
                state.bump()?;
                return Ok((body, terminator));
            }
            if state.at_end() {
                return Err(state.never_ended(construct));
            }

            body.push(state.parse_binary_expression(BP_LOWEST)?);

            if state.at_end() {
                return Err(state.never_ended(construct));
            }
            if !state.at_separator() {
                return Err(state.syntax_error(construct));
            }
        }
    })
}

/// Body that only `end` closes
pub fn parse_end_body<I: TokenStream>(
    state: &mut ParserState<I>,
    construct: Construct,
) -> Result<Vec<Node>, ParseError> {
    let (body, _) = parse_body(state, construct, &[DirectValue::End])?;
    Ok(body)
}

/// `BEGIN` block of a program
pub fn parse_begin_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<BeginStatement, ParseError> {
    state.bump()?; // consume 'BEGIN'
    state.expect_newline(Construct::Begin)?;
    let body = parse_end_body(state, Construct::Begin)?;
    Ok(BeginStatement { body })
}

/// `END` block of a program
pub fn parse_end_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<EndStatement, ParseError> {
    state.bump()?; // consume 'END'
    state.expect_newline(Construct::End)?;
    let body = parse_end_body(state, Construct::End)?;
    Ok(EndStatement { body })
}

fn at_terminator<I: TokenStream>(
    state: &ParserState<I>,
    terminators: &[DirectValue],
) -> Option<DirectValue> {
    terminators
        .iter()
        .copied()
        .find(|terminator| state.at_keyword(*terminator))
}
