//! Control flow statement parsing
//! Handles conditionals, loops, switch, try and the jump statements

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::statements::blocks::{parse_body, parse_end_body};
use crate::frontend::core::parser::ParseError;

/// Parse if statement: `if cond ... [elif cond ...]* [else ...] end`
pub fn parse_if_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    Ok(Statement::If(parse_conditional(state, Construct::If)?))
}

/// Parse unless statement, shaped like `if`
pub fn parse_unless_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    Ok(Statement::Unless(parse_conditional(state, Construct::Unless)?))
}

fn parse_conditional<I: TokenStream>(
    state: &mut ParserState<I>,
    construct: Construct,
) -> Result<Conditional, ParseError> {
    const FOLLOW: [DirectValue; 3] = [DirectValue::Elif, DirectValue::Else, DirectValue::End];

    state.bump()?; // consume 'if' / 'unless'
    let condition = state.parse_expression(construct)?;
    state.expect_newline(construct)?;
    let (body, mut terminator) = parse_body(state, construct, &FOLLOW)?;

    let mut elif_blocks = Vec::new();
    while terminator == DirectValue::Elif {
        let condition = state.parse_expression(construct)?;
        state.expect_newline(construct)?;
        let (body, next) = parse_body(state, construct, &FOLLOW)?;
        elif_blocks.push(ElifBlock { condition, body });
        terminator = next;
    }

    let else_body = if terminator == DirectValue::Else {
        state.expect_newline(construct)?;
        parse_end_body(state, construct)?
    } else {
        Vec::new()
    };

    Ok(Conditional {
        condition,
        body,
        elif_blocks,
        else_body,
    })
}

/// Parse while loop: `while cond ... end`
pub fn parse_while_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    Ok(Statement::While(parse_loop(state, Construct::While)?))
}

/// Parse until loop: `until cond ... end`
pub fn parse_until_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    Ok(Statement::Until(parse_loop(state, Construct::Until)?))
}

fn parse_loop<I: TokenStream>(
    state: &mut ParserState<I>,
    construct: Construct,
) -> Result<LoopStatement, ParseError> {
    state.bump()?; // consume 'while' / 'until'
    let condition = state.parse_expression(construct)?;
    state.expect_newline(construct)?;
    let body = parse_end_body(state, construct)?;
    Ok(LoopStatement { condition, body })
}

/// Parse do-while loop: `do ... while cond`
///
/// The body closes at the first line that opens with `while`.
pub fn parse_do_while_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'do'
    state.expect_newline(Construct::DoWhile)?;
    let (body, _) = parse_body(state, Construct::DoWhile, &[DirectValue::While])?;
    let condition = state.parse_expression(Construct::DoWhile)?;
    Ok(Statement::DoWhile(LoopStatement { condition, body }))
}

/// Parse for loop: `for r1, r2 in source ... end`
pub fn parse_for_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'for'
    let receivers = state.parse_receivers(Construct::For)?;
    state.expect(DirectValue::In, Construct::For)?;
    let source = state.parse_expression(Construct::For)?;
    state.expect_newline(Construct::For)?;
    let body = parse_end_body(state, Construct::For)?;

    Ok(Statement::For(ForStatement {
        receivers,
        source,
        body,
    }))
}

/// Parse switch: `switch target / case a, b ... / default ... / end`
pub fn parse_switch_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    const FOLLOW: [DirectValue; 3] = [DirectValue::Case, DirectValue::Default, DirectValue::End];

    state.bump()?; // consume 'switch'
    let target = state.parse_expression(Construct::Switch)?;
    state.expect_newline(Construct::Switch)?;

    // Only case, default or end may open the switch body
    state.skip_separators()?;
    let mut terminator = match FOLLOW.iter().copied().find(|kw| state.at_keyword(*kw)) {
        Some(keyword) => {
            state.bump()?;
            keyword
        }
        None if state.at_end() => return Err(state.never_ended(Construct::Switch)),
        None => return Err(state.syntax_error(Construct::Switch)),
    };

    let mut case_blocks = Vec::new();
    let mut default_body = Vec::new();
    loop {
        match terminator {
            DirectValue::Case => {
                let mut cases = vec![state.parse_expression(Construct::Switch)?];
                while state.at(DirectValue::Comma) {
                    state.bump()?;
                    cases.push(state.parse_expression(Construct::Switch)?);
                }
                state.expect_newline(Construct::Switch)?;
                let (body, next) = parse_body(state, Construct::Switch, &FOLLOW)?;
                case_blocks.push(CaseBlock { cases, body });
                terminator = next;
            }
            DirectValue::Default => {
                state.expect_newline(Construct::Switch)?;
                default_body = parse_end_body(state, Construct::Switch)?;
                break;
            }
            _ => break,
        }
    }

    Ok(Statement::Switch(SwitchStatement {
        target,
        case_blocks,
        default_body,
    }))
}

/// Parse try: `try ... [except targets [as name] ...]* [else ...] [finally ...] end`
pub fn parse_try_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    const FOLLOW: [DirectValue; 4] = [
        DirectValue::Except,
        DirectValue::Else,
        DirectValue::Finally,
        DirectValue::End,
    ];

    state.bump()?; // consume 'try'
    state.expect_newline(Construct::Try)?;
    let (body, mut terminator) = parse_body(state, Construct::Try, &FOLLOW)?;

    let mut except_blocks = Vec::new();
    while terminator == DirectValue::Except {
        let mut targets = Vec::new();
        if !state.at_newline() && !state.at(DirectValue::As) {
            targets.push(state.parse_expression(Construct::Try)?);
            while state.at(DirectValue::Comma) {
                state.bump()?;
                targets.push(state.parse_expression(Construct::Try)?);
            }
        }

        let receiver = if state.at(DirectValue::As) {
            state.bump()?;
            Some(Identifier::new(state.expect_identifier(Construct::Try)?))
        } else {
            None
        };

        state.expect_newline(Construct::Try)?;
        let (body, next) = parse_body(state, Construct::Try, &FOLLOW)?;
        except_blocks.push(ExceptBlock {
            targets,
            receiver,
            body,
        });
        terminator = next;
    }

    let mut else_body = Vec::new();
    if terminator == DirectValue::Else {
        state.expect_newline(Construct::Try)?;
        let (body, next) =
            parse_body(state, Construct::Try, &[DirectValue::Finally, DirectValue::End])?;
        else_body = body;
        terminator = next;
    }

    let finally_body = if terminator == DirectValue::Finally {
        state.expect_newline(Construct::Try)?;
        parse_end_body(state, Construct::Try)?
    } else {
        Vec::new()
    };

    Ok(Statement::Try(TryStatement {
        body,
        except_blocks,
        else_body,
        finally_body,
    }))
}

/// Parse the result list of `return` / `yield`, possibly empty
pub fn parse_results<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Vec<Expression>, ParseError> {
    let construct = if state.at_keyword(DirectValue::Yield) {
        Construct::Yield
    } else {
        Construct::Return
    };
    state.bump()?; // consume 'return' / 'yield'

    let mut results = Vec::new();
    if state.at_separator() || state.at_end() {
        return Ok(results);
    }

    results.push(state.parse_expression(construct)?);
    while state.at(DirectValue::Comma) {
        state.bump()?;
        results.push(state.parse_expression(construct)?);
    }
    Ok(results)
}

/// Parse raise statement: `raise expr`
pub fn parse_raise_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'raise'
    Ok(Statement::Raise(state.parse_expression(Construct::Raise)?))
}

/// Keyword-only statements: `continue`, `break`, `redo`, `pass`
pub fn parse_jump_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
    statement: Statement,
) -> Result<Statement, ParseError> {
    state.bump()?;
    Ok(statement)
}
