//! 基础测试 - 标识符、换行、EOF、位置

use crate::frontend::core::lexer::{lex, tokenize, DirectValue, LexError, Token, TokenKind};

#[cfg(test)]
mod lexer_basic_tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, DirectValue)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.value))
            .collect()
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_whitespace_only() {
        let tokens = tokenize("   \t  \t").unwrap();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_eof());
    }

    #[test]
    fn test_unicode_identifiers() {
        let tokens = tokenize("café = 名字 + _été2").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["café", "=", "名字", "+", "_été2", ""]);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        // the identifier stops before a non-identifier character
        assert!(matches!(
            tokenize("é€"),
            Err(LexError::UnexpectedChar { ch: '€', .. })
        ));
    }

    #[test]
    fn test_identifier() {
        let tokens = tokenize("helloWorld").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "helloWorld");
    }

    #[test]
    fn test_identifier_with_underscore_and_digits() {
        let tokens = tokenize("_my_var2 b2").unwrap();
        assert_eq!(tokens[0].text, "_my_var2");
        assert_eq!(tokens[1].text, "b2");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_newline_is_separator() {
        assert_eq!(
            kinds("a\nb"),
            vec![
                (TokenKind::Identifier, DirectValue::InvalidDirectValue),
                (TokenKind::Separator, DirectValue::NewLine),
                (TokenKind::Identifier, DirectValue::InvalidDirectValue),
                (TokenKind::Eof, DirectValue::Blank),
            ]
        );
    }

    #[test]
    fn test_semicolon_is_separator() {
        let tokens = tokenize("a; b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Separator);
        assert_eq!(tokens[1].value, DirectValue::Semicolon);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("a = 1\n  bc").unwrap();
        let bc = &tokens[4];
        assert_eq!(bc.text, "bc");
        assert_eq!(bc.line(), 2);
        assert_eq!(bc.column(), 3);
        assert_eq!(bc.index(), 8);
        assert_eq!(tokens[0].index(), 0);
        assert_eq!(tokens[2].column(), 5);
    }

    #[test]
    fn test_eof_repeats_and_has_next_turns_false() {
        let mut lexer = lex("x");
        assert!(lexer.has_next());
        assert_eq!(lexer.next_token().unwrap().text, "x");
        assert!(lexer.has_next());
        assert!(lexer.next_token().unwrap().is_eof());
        assert!(!lexer.has_next());
        assert!(lexer.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_iterator_ends_after_single_eof() {
        let tokens: Vec<_> = lex("a b").collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].as_ref().unwrap().is_eof());
    }

    #[test]
    fn test_token_equality_ignores_position() {
        let first = &tokenize("x").unwrap()[0];
        let second = &tokenize("  x").unwrap()[0];
        assert_eq!(first, second);
        assert_ne!(first.index(), second.index());
        assert_eq!(first.to_string(), "x");
        let other: &Token = &tokenize("y").unwrap()[0];
        assert_ne!(first, other);
    }
}
