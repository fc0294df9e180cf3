//! Declaration statement parsing
//! Handles modules, functions, generators, interfaces and classes

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::parser_state::{Construct, ParserState, TokenStream};
use crate::frontend::core::parser::statements::blocks::parse_end_body;
use crate::frontend::core::parser::ParseError;

/// Parse module: `module name ... end`
pub fn parse_module_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'module'
    let name = Identifier::new(state.expect_identifier(Construct::Module)?);
    state.expect_newline(Construct::Module)?;
    let body = parse_end_body(state, Construct::Module)?;
    Ok(Statement::Module(ModuleStatement { name, body }))
}

/// Parse `def name(args) ... end` or `generator name(args) ... end`
pub fn parse_function_def<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<FunctionDefinition, ParseError> {
    let construct = if state.at_keyword(DirectValue::Generator) {
        Construct::GeneratorDefinition
    } else {
        Construct::FunctionDefinition
    };
    state.bump()?; // consume 'def' / 'generator'

    let name = Identifier::new(state.expect_identifier(construct)?);
    state.expect(DirectValue::OpenParentheses, construct)?;
    state.skip_newlines()?;
    let arguments = if state.at(DirectValue::CloseParentheses) {
        Vec::new()
    } else {
        state.parse_receivers(construct)?
    };
    state.skip_newlines()?;
    state.expect_closing(DirectValue::CloseParentheses, construct)?;
    state.expect_newline(construct)?;

    let body = parse_end_body(state, construct)?;
    Ok(FunctionDefinition {
        name,
        arguments,
        body,
    })
}

/// Parse interface: `interface name[(bases)] def ... end ... end`
///
/// Only function definitions may appear in the body.
pub fn parse_interface_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'interface'
    let name = Identifier::new(state.expect_identifier(Construct::Interface)?);
    let bases = parse_bases(state, Construct::Interface)?;
    state.expect_newline(Construct::Interface)?;

    let methods = state.within(Construct::Interface, |state| {
        let mut methods = Vec::new();
        loop {
            state.skip_separators()?;
            if state.at_keyword(DirectValue::End) {
                state.bump()?;
                return Ok(methods);
            }
            if state.at_end() {
                return Err(state.never_ended(Construct::Interface));
            }
            if !state.at_keyword(DirectValue::Def) {
                return Err(state.fail(ParseError::ExpectingFunctionDefinition {
                    position: state.position(),
                }));
            }

            methods.push(parse_function_def(state)?);

            if state.at_end() {
                return Err(state.never_ended(Construct::Interface));
            }
            if !state.at_separator() {
                return Err(state.syntax_error(Construct::Interface));
            }
        }
    })?;

    Ok(Statement::Interface(InterfaceStatement {
        name,
        bases,
        methods,
    }))
}

/// Parse class: `class name[(bases)] ... end`
pub fn parse_class_stmt<I: TokenStream>(
    state: &mut ParserState<I>,
) -> Result<Statement, ParseError> {
    state.bump()?; // consume 'class'
    let name = Identifier::new(state.expect_identifier(Construct::Class)?);
    let bases = parse_bases(state, Construct::Class)?;
    state.expect_newline(Construct::Class)?;
    let body = parse_end_body(state, Construct::Class)?;

    Ok(Statement::Class(ClassStatement { name, bases, body }))
}

/// Optional parenthesized base list
fn parse_bases<I: TokenStream>(
    state: &mut ParserState<I>,
    construct: Construct,
) -> Result<Vec<Expression>, ParseError> {
    if !state.at(DirectValue::OpenParentheses) {
        return Ok(Vec::new());
    }
    state.bump()?; // consume '('
    state.parse_expression_list(DirectValue::CloseParentheses, construct)
}
