//! 字面量测试 - 整数、浮点、字符串、字节串、命令输出

use crate::frontend::core::lexer::{tokenize, DirectValue, LexError, TokenKind};

#[cfg(test)]
mod lexer_literals_tests {
    use super::*;

    fn single(source: &str) -> (String, TokenKind, DirectValue) {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2, "expected one token for {source:?}");
        (tokens[0].text.clone(), tokens[0].kind, tokens[0].value)
    }

    #[test]
    fn test_integer_literal() {
        assert_eq!(
            single("42"),
            ("42".to_string(), TokenKind::Literal, DirectValue::Integer)
        );
    }

    #[test]
    fn test_integer_with_underscores_keeps_text() {
        assert_eq!(single("1_000_000").0, "1_000_000");
        assert_eq!(single("1_000_000").2, DirectValue::Integer);
    }

    #[test]
    fn test_prefixed_integers() {
        assert_eq!(single("0xFF_ff").2, DirectValue::HexadecimalInteger);
        assert_eq!(single("0b1010").2, DirectValue::BinaryInteger);
        assert_eq!(single("0o777").2, DirectValue::OctalInteger);
        assert_eq!(single("0X1f").2, DirectValue::HexadecimalInteger);
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(single("3.14").2, DirectValue::Float);
        assert_eq!(single("1e10").2, DirectValue::ScientificFloat);
        assert_eq!(single("2.5e-3").2, DirectValue::ScientificFloat);
        assert_eq!(single("6E+2").2, DirectValue::ScientificFloat);
    }

    #[test]
    fn test_dot_after_integer_is_selector() {
        let tokens = tokenize("1.bit_length").unwrap();
        assert_eq!(tokens[0].value, DirectValue::Integer);
        assert_eq!(tokens[1].value, DirectValue::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_string_literals_keep_delimiters() {
        assert_eq!(
            single("'hello'"),
            (
                "'hello'".to_string(),
                TokenKind::Literal,
                DirectValue::SingleQuoteString
            )
        );
        assert_eq!(single("\"hi\"").2, DirectValue::DoubleQuoteString);
        assert_eq!(single("`ls -l`").2, DirectValue::CommandOutput);
    }

    #[test]
    fn test_byte_strings() {
        assert_eq!(
            single("b'raw'"),
            ("b'raw'".to_string(), TokenKind::Literal, DirectValue::ByteString)
        );
        assert_eq!(single("b\"raw\"").2, DirectValue::ByteString);
        // A bare `b` is still an identifier
        assert_eq!(single("b").1, TokenKind::Identifier);
        assert_eq!(single("bytes").1, TokenKind::Identifier);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        assert_eq!(single(r#""say \"hi\"""#).0, r#""say \"hi\"""#);
        assert_eq!(single(r"'it\'s'").0, r"'it\'s'");
    }

    #[test]
    fn test_newline_inside_string() {
        let (text, _, value) = single("'line1\nline2'");
        assert_eq!(text, "'line1\nline2'");
        assert_eq!(value, DirectValue::SingleQuoteString);
    }

    #[test]
    fn test_unicode_inside_string() {
        assert_eq!(single("\"héllo 😀\"").0, "\"héllo 😀\"");
    }

    #[test]
    fn test_malformed_numbers() {
        assert!(matches!(
            tokenize("0x"),
            Err(LexError::InvalidNumber { .. })
        ));
        assert!(matches!(
            tokenize("0b102"),
            Err(LexError::InvalidNumber { .. })
        ));
        assert!(matches!(
            tokenize("12abc"),
            Err(LexError::InvalidNumber { .. })
        ));
        assert!(matches!(
            tokenize("1e+"),
            Err(LexError::InvalidNumber { .. })
        ));
    }
}
