//! Parser state tests - ParserState 单元测试

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::lexer::{lex, LexError};
use crate::frontend::core::parser::parser_state::{Construct, ParseError, ParserState};
use crate::util::span::{Position, Span};

fn create_token(
    text: &str,
    kind: TokenKind,
    value: DirectValue,
    offset: usize,
) -> Token {
    Token::new(
        text,
        kind,
        value,
        Span::new(
            Position::with_offset(1, offset + 1, offset),
            Position::with_offset(1, offset + 1 + text.len(), offset + text.len()),
        ),
    )
}

#[cfg(test)]
mod parser_state_tests {
    use super::*;

    // =========================================================================
    // ParserState 初始化测试
    // =========================================================================

    #[test]
    fn test_parser_state_starts_before_first_token() {
        let mut state = ParserState::new(lex("a"));
        assert_eq!(state.current().kind, TokenKind::Unknown);
        assert!(!state.at_end());

        state.next().unwrap();
        assert_eq!(state.current().text, "a");
        assert!(state.at_kind(TokenKind::Identifier));
    }

    #[test]
    fn test_parser_state_empty_stream() {
        let tokens: Vec<Result<Token, LexError>> = vec![];
        let mut state = ParserState::new(tokens.into_iter());
        state.next().unwrap();
        assert!(state.at_end());
    }

    // =========================================================================
    // 前进与查看测试
    // =========================================================================

    #[test]
    fn test_bump_returns_current() {
        let mut state = ParserState::new(lex("a + 1"));
        state.next().unwrap();

        let first = state.bump().unwrap();
        assert_eq!(first.text, "a");
        assert!(state.at(DirectValue::Add));
        assert!(state.at_kind(TokenKind::Operator));
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut state = ParserState::new(lex("a"));
        state.next().unwrap();
        state.bump().unwrap();
        assert!(state.at_end());

        state.next().unwrap();
        state.next().unwrap();
        assert!(state.at_end());
    }

    #[test]
    fn test_missing_eof_is_synthesized() {
        let tokens = vec![Ok(create_token(
            "x",
            TokenKind::Identifier,
            DirectValue::Blank,
            0,
        ))];
        let mut state = ParserState::new(tokens.into_iter());
        state.next().unwrap();
        state.bump().unwrap();
        assert!(state.at_end());
        assert_eq!(state.position().offset, 1);
    }

    #[test]
    fn test_skip_newlines_and_separators() {
        let mut state = ParserState::new(lex("\n\n;\na"));
        state.next().unwrap();

        state.skip_newlines().unwrap();
        assert!(state.at(DirectValue::Semicolon));
        assert!(!state.at_newline());

        state.skip_separators().unwrap();
        assert_eq!(state.current().text, "a");
    }

    #[test]
    fn test_at_keyword() {
        let mut state = ParserState::new(lex("end"));
        state.next().unwrap();
        assert!(state.at_keyword(DirectValue::End));
        assert!(!state.at_keyword(DirectValue::If));
    }

    // =========================================================================
    // expect 系列测试
    // =========================================================================

    #[test]
    fn test_expect_success() {
        let mut state = ParserState::new(lex("( x"));
        state.next().unwrap();
        let open = state
            .expect(DirectValue::OpenParentheses, Construct::Parentheses)
            .unwrap();
        assert_eq!(open.text, "(");
        assert_eq!(state.current().text, "x");
    }

    #[test]
    fn test_expect_mismatch_is_syntax_error() {
        let mut state = ParserState::new(lex("x"));
        state.next().unwrap();
        let err = state
            .expect(DirectValue::Colon, Construct::Lambda)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::SyntaxError {
                construct: Construct::Lambda,
                ..
            }
        ));
    }

    #[test]
    fn test_expect_at_eof() {
        let mut state = ParserState::new(lex(""));
        state.next().unwrap();

        let err = state.expect(DirectValue::In, Construct::For).unwrap_err();
        assert!(matches!(err, ParseError::StatementNeverEnded { .. }));

        let err = state
            .expect_closing(DirectValue::CloseSquareBracket, Construct::Array)
            .unwrap_err();
        assert!(matches!(err, ParseError::ExpressionNeverClosed { .. }));
    }

    #[test]
    fn test_expect_newline() {
        let mut state = ParserState::new(lex("\nx"));
        state.next().unwrap();
        state.expect_newline(Construct::If).unwrap();
        assert_eq!(state.current().text, "x");

        let err = state.expect_newline(Construct::If).unwrap_err();
        assert_eq!(err.construct(), Some(Construct::If));
    }

    #[test]
    fn test_expect_identifier() {
        let mut state = ParserState::new(lex("name 1"));
        state.next().unwrap();
        assert_eq!(state.expect_identifier(Construct::Module).unwrap().text, "name");
        assert!(state.expect_identifier(Construct::Module).is_err());
    }

    // =========================================================================
    // 上下文栈测试
    // =========================================================================

    #[test]
    fn test_within_tracks_context() {
        let mut state = ParserState::new(lex("x"));
        let seen = state
            .within(Construct::Class, |state| {
                state.within(Construct::FunctionDefinition, |state| {
                    Ok(state.context().to_vec())
                })
            })
            .unwrap();

        assert_eq!(seen, vec![Construct::Class, Construct::FunctionDefinition]);
        assert!(state.context().is_empty());
    }

    #[test]
    fn test_within_pops_on_error() {
        let mut state = ParserState::new(lex("x"));
        let result: Result<(), ParseError> =
            state.within(Construct::While, |state| Err(state.syntax_error(Construct::While)));
        assert!(result.is_err());
        assert!(state.context().is_empty());
    }

    #[test]
    fn test_lex_errors_surface_through_next() {
        let mut state = ParserState::new(lex("'open"));
        let err = state.next().unwrap_err();
        assert!(matches!(
            err,
            ParseError::Lex(LexError::UnterminatedString { .. })
        ));
    }
}
