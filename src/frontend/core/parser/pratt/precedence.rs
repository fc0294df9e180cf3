//! Precedence handling for Pratt parser
//!
//! Binding power levels for binary operators. Operators sharing a level are
//! left-associative.

use crate::frontend::core::lexer::tokens::{DirectValue, Token, TokenKind};

/// Binding power levels for Pratt parser
pub const BP_LOWEST: u8 = 0;
pub const BP_LOGICAL_OR: u8 = 1;
pub const BP_LOGICAL_AND: u8 = 2;
pub const BP_MEMBERSHIP: u8 = 3;
pub const BP_COMPARISON: u8 = 4;
pub const BP_BIT_OR: u8 = 5;
pub const BP_BIT_XOR: u8 = 6;
pub const BP_BIT_AND: u8 = 7;
pub const BP_SHIFT: u8 = 8;
pub const BP_TERM: u8 = 9;
pub const BP_FACTOR: u8 = 10;
pub const BP_POWER: u8 = 11;

/// Binding power of a binary operator token, `None` when it is not one
///
/// `not` and `as` are comparators by kind but never binary.
pub fn binary_precedence(token: &Token) -> Option<u8> {
    if !matches!(token.kind, TokenKind::Operator | TokenKind::Comparator) {
        return None;
    }
    let bp = match token.value {
        DirectValue::Or | DirectValue::Xor => BP_LOGICAL_OR,
        DirectValue::And => BP_LOGICAL_AND,
        DirectValue::In => BP_MEMBERSHIP,
        DirectValue::Equals
        | DirectValue::NotEqual
        | DirectValue::LessThan
        | DirectValue::LessOrEqualThan
        | DirectValue::GreaterThan
        | DirectValue::GreaterOrEqualThan => BP_COMPARISON,
        DirectValue::BitwiseOr => BP_BIT_OR,
        DirectValue::BitwiseXor => BP_BIT_XOR,
        DirectValue::BitwiseAnd => BP_BIT_AND,
        DirectValue::BitwiseLeft | DirectValue::BitwiseRight => BP_SHIFT,
        DirectValue::Add | DirectValue::Sub => BP_TERM,
        DirectValue::Star | DirectValue::Div | DirectValue::FloorDiv | DirectValue::Modulus => {
            BP_FACTOR
        }
        DirectValue::PowerOf => BP_POWER,
        _ => return None,
    };
    Some(bp)
}

/// Prefix operators: `+ - ~ !` and the word `not`
pub fn is_unary_operator(token: &Token) -> bool {
    match token.kind {
        TokenKind::Operator => matches!(
            token.value,
            DirectValue::Add | DirectValue::Sub | DirectValue::NegateBits | DirectValue::SignNot
        ),
        TokenKind::Comparator => token.value == DirectValue::Not,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::span::Position;

    fn token(
        kind: TokenKind,
        value: DirectValue,
    ) -> Token {
        Token::synthetic("", kind, value, Position::dummy())
    }

    #[test]
    fn test_factor_binds_tighter_than_term() {
        let plus = binary_precedence(&token(TokenKind::Operator, DirectValue::Add));
        let star = binary_precedence(&token(TokenKind::Operator, DirectValue::Star));
        assert!(star > plus);
    }

    #[test]
    fn test_word_comparators() {
        assert_eq!(
            binary_precedence(&token(TokenKind::Comparator, DirectValue::Or)),
            Some(BP_LOGICAL_OR)
        );
        assert_eq!(
            binary_precedence(&token(TokenKind::Comparator, DirectValue::Not)),
            None
        );
        assert_eq!(
            binary_precedence(&token(TokenKind::Comparator, DirectValue::As)),
            None
        );
    }

    #[test]
    fn test_unary_operators() {
        assert!(is_unary_operator(&token(TokenKind::Operator, DirectValue::SignNot)));
        assert!(is_unary_operator(&token(TokenKind::Comparator, DirectValue::Not)));
        assert!(!is_unary_operator(&token(TokenKind::Operator, DirectValue::Star)));
        assert!(binary_precedence(&token(TokenKind::Operator, DirectValue::NegateBits)).is_none());
    }
}
