//! 注释与续行测试

use crate::frontend::core::lexer::{tokenize, DirectValue, TokenKind};

#[cfg(test)]
mod lexer_comments_tests {
    use super::*;

    #[test]
    fn test_comment_is_dropped_but_newline_kept() {
        let tokens = tokenize("42 # comment\n99").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["42", "\n", "99", ""]);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let tokens = tokenize("x # trailing").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].is_eof());
    }

    #[test]
    fn test_hash_inside_string_is_not_comment() {
        let tokens = tokenize("'a # b'").unwrap();
        assert_eq!(tokens[0].text, "'a # b'");
    }

    #[test]
    fn test_line_continuation() {
        let tokens = tokenize("a + \\\n b").unwrap();
        assert!(tokens
            .iter()
            .all(|t| t.value != DirectValue::NewLine));
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].line(), 2);
    }

    #[test]
    fn test_line_continuation_with_carriage_return() {
        let tokens = tokenize("a \\\r\n b").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }
}
