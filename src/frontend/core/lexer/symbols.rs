//! Punctuation and operator table
//!
//! The scanner resolves symbols by longest match against this table.

use crate::frontend::core::lexer::tokens::{DirectValue, TokenKind};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Every punctuator, operator, comparator and assignment spelling
const SYMBOLS: &[(&str, TokenKind, DirectValue)] = &[
    // Punctuation
    (",", TokenKind::Punctuation, DirectValue::Comma),
    (":", TokenKind::Punctuation, DirectValue::Colon),
    (".", TokenKind::Punctuation, DirectValue::Dot),
    ("(", TokenKind::Punctuation, DirectValue::OpenParentheses),
    (")", TokenKind::Punctuation, DirectValue::CloseParentheses),
    ("[", TokenKind::Punctuation, DirectValue::OpenSquareBracket),
    ("]", TokenKind::Punctuation, DirectValue::CloseSquareBracket),
    ("{", TokenKind::Punctuation, DirectValue::OpenBrace),
    ("}", TokenKind::Punctuation, DirectValue::CloseBrace),
    (";", TokenKind::Separator, DirectValue::Semicolon),
    // Operators
    ("+", TokenKind::Operator, DirectValue::Add),
    ("-", TokenKind::Operator, DirectValue::Sub),
    ("*", TokenKind::Operator, DirectValue::Star),
    ("/", TokenKind::Operator, DirectValue::Div),
    ("//", TokenKind::Operator, DirectValue::FloorDiv),
    ("**", TokenKind::Operator, DirectValue::PowerOf),
    ("%", TokenKind::Operator, DirectValue::Modulus),
    ("|", TokenKind::Operator, DirectValue::BitwiseOr),
    ("^", TokenKind::Operator, DirectValue::BitwiseXor),
    ("&", TokenKind::Operator, DirectValue::BitwiseAnd),
    ("<<", TokenKind::Operator, DirectValue::BitwiseLeft),
    (">>", TokenKind::Operator, DirectValue::BitwiseRight),
    ("~", TokenKind::Operator, DirectValue::NegateBits),
    ("!", TokenKind::Operator, DirectValue::SignNot),
    // Comparators
    ("==", TokenKind::Comparator, DirectValue::Equals),
    ("!=", TokenKind::Comparator, DirectValue::NotEqual),
    ("<", TokenKind::Comparator, DirectValue::LessThan),
    ("<=", TokenKind::Comparator, DirectValue::LessOrEqualThan),
    (">", TokenKind::Comparator, DirectValue::GreaterThan),
    (">=", TokenKind::Comparator, DirectValue::GreaterOrEqualThan),
    // Assignment
    ("=", TokenKind::Assignment, DirectValue::Assign),
    ("+=", TokenKind::Assignment, DirectValue::AddAssign),
    ("-=", TokenKind::Assignment, DirectValue::SubAssign),
    ("*=", TokenKind::Assignment, DirectValue::StarAssign),
    ("/=", TokenKind::Assignment, DirectValue::DivAssign),
    ("//=", TokenKind::Assignment, DirectValue::FloorDivAssign),
    ("**=", TokenKind::Assignment, DirectValue::PowerOfAssign),
    ("%=", TokenKind::Assignment, DirectValue::ModulusAssign),
    ("|=", TokenKind::Assignment, DirectValue::BitwiseOrAssign),
    ("^=", TokenKind::Assignment, DirectValue::BitwiseXorAssign),
    ("&=", TokenKind::Assignment, DirectValue::BitwiseAndAssign),
    ("<<=", TokenKind::Assignment, DirectValue::BitwiseLeftAssign),
    (">>=", TokenKind::Assignment, DirectValue::BitwiseRightAssign),
];

static SYMBOL_TABLE: Lazy<HashMap<&'static str, (TokenKind, DirectValue)>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .map(|&(text, kind, value)| (text, (kind, value)))
        .collect()
});

/// Every non-empty prefix of a table entry
static SYMBOL_PREFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    SYMBOLS
        .iter()
        .flat_map(|&(text, _, _)| (1..=text.len()).map(move |end| &text[..end]))
        .collect()
});

/// Look up an exact symbol spelling
pub fn lookup_symbol(text: &str) -> Option<(TokenKind, DirectValue)> {
    SYMBOL_TABLE.get(text).copied()
}

/// Whether some symbol starts with `text`
pub fn is_symbol_prefix(text: &str) -> bool {
    SYMBOL_PREFIXES.contains(text)
}

/// Operator underlying a compound assignment (`+=` → `+`)
pub fn compound_operator(value: DirectValue) -> Option<DirectValue> {
    let op = match value {
        DirectValue::AddAssign => DirectValue::Add,
        DirectValue::SubAssign => DirectValue::Sub,
        DirectValue::StarAssign => DirectValue::Star,
        DirectValue::DivAssign => DirectValue::Div,
        DirectValue::FloorDivAssign => DirectValue::FloorDiv,
        DirectValue::PowerOfAssign => DirectValue::PowerOf,
        DirectValue::ModulusAssign => DirectValue::Modulus,
        DirectValue::BitwiseOrAssign => DirectValue::BitwiseOr,
        DirectValue::BitwiseXorAssign => DirectValue::BitwiseXor,
        DirectValue::BitwiseAndAssign => DirectValue::BitwiseAnd,
        DirectValue::BitwiseLeftAssign => DirectValue::BitwiseLeft,
        DirectValue::BitwiseRightAssign => DirectValue::BitwiseRight,
        _ => return None,
    };
    Some(op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_multi_char() {
        assert_eq!(
            lookup_symbol("**="),
            Some((TokenKind::Assignment, DirectValue::PowerOfAssign))
        );
        assert_eq!(
            lookup_symbol("//"),
            Some((TokenKind::Operator, DirectValue::FloorDiv))
        );
        assert_eq!(lookup_symbol("@"), None);
    }

    #[test]
    fn test_every_prefix_is_a_symbol() {
        // Greedy scanning never has to back off more than one byte.
        for prefix in SYMBOL_PREFIXES.iter() {
            assert!(lookup_symbol(prefix).is_some(), "{prefix} is not a symbol");
        }
    }

    #[test]
    fn test_compound_operator() {
        assert_eq!(
            compound_operator(DirectValue::BitwiseLeftAssign),
            Some(DirectValue::BitwiseLeft)
        );
        assert_eq!(compound_operator(DirectValue::Assign), None);
    }
}
