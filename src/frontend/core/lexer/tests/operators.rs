//! 运算符测试 - 最长匹配

use crate::frontend::core::lexer::{tokenize, DirectValue, TokenKind};

#[cfg(test)]
mod lexer_operators_tests {
    use super::*;

    fn values(source: &str) -> Vec<DirectValue> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            values("+ - * / % | ^ & ~ !"),
            vec![
                DirectValue::Add,
                DirectValue::Sub,
                DirectValue::Star,
                DirectValue::Div,
                DirectValue::Modulus,
                DirectValue::BitwiseOr,
                DirectValue::BitwiseXor,
                DirectValue::BitwiseAnd,
                DirectValue::NegateBits,
                DirectValue::SignNot,
            ]
        );
    }

    #[test]
    fn test_multi_char_operators_win() {
        assert_eq!(
            values("** // << >> == != <= >="),
            vec![
                DirectValue::PowerOf,
                DirectValue::FloorDiv,
                DirectValue::BitwiseLeft,
                DirectValue::BitwiseRight,
                DirectValue::Equals,
                DirectValue::NotEqual,
                DirectValue::LessOrEqualThan,
                DirectValue::GreaterOrEqualThan,
            ]
        );
    }

    #[test]
    fn test_compound_assignments() {
        assert_eq!(
            values("= += -= *= /= //= **= %= |= ^= &= <<= >>="),
            vec![
                DirectValue::Assign,
                DirectValue::AddAssign,
                DirectValue::SubAssign,
                DirectValue::StarAssign,
                DirectValue::DivAssign,
                DirectValue::FloorDivAssign,
                DirectValue::PowerOfAssign,
                DirectValue::ModulusAssign,
                DirectValue::BitwiseOrAssign,
                DirectValue::BitwiseXorAssign,
                DirectValue::BitwiseAndAssign,
                DirectValue::BitwiseLeftAssign,
                DirectValue::BitwiseRightAssign,
            ]
        );
    }

    #[test]
    fn test_adjacent_operators_split() {
        // `***` is `**` followed by `*`
        assert_eq!(values("***"), vec![DirectValue::PowerOf, DirectValue::Star]);
        assert_eq!(values("a<-b")[1], DirectValue::LessThan);
        assert_eq!(values("a<-b")[2], DirectValue::Sub);
    }

    #[test]
    fn test_operator_kinds() {
        let tokens = tokenize("a == b + c").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Comparator);
        assert_eq!(tokens[3].kind, TokenKind::Operator);
        let tokens = tokenize("a += 1").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Assignment);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            values("( ) [ ] { } , . :"),
            vec![
                DirectValue::OpenParentheses,
                DirectValue::CloseParentheses,
                DirectValue::OpenSquareBracket,
                DirectValue::CloseSquareBracket,
                DirectValue::OpenBrace,
                DirectValue::CloseBrace,
                DirectValue::Comma,
                DirectValue::Dot,
                DirectValue::Colon,
            ]
        );
    }
}
