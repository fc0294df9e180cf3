//! Keyword table
//! Reclassifies identifier spellings as keywords, constants and word comparators

use crate::frontend::core::lexer::tokens::{DirectValue, TokenKind};

/// Reclassify an identifier spelling as a keyword, constant or word comparator
pub fn keyword_from_str(s: &str) -> Option<(TokenKind, DirectValue)> {
    let keyword = |value| Some((TokenKind::Keyword, value));
    let comparator = |value| Some((TokenKind::Comparator, value));
    match s {
        // Word comparators
        "in" => comparator(DirectValue::In),
        "and" => comparator(DirectValue::And),
        "or" => comparator(DirectValue::Or),
        "xor" => comparator(DirectValue::Xor),
        "not" => comparator(DirectValue::Not),
        "as" => comparator(DirectValue::As),

        // Constants
        "True" => Some((TokenKind::Boolean, DirectValue::True)),
        "False" => Some((TokenKind::Boolean, DirectValue::False)),
        "None" => Some((TokenKind::NoneType, DirectValue::None)),

        // Control flow keywords
        "pass" => keyword(DirectValue::Pass),
        "end" => keyword(DirectValue::End),
        "if" => keyword(DirectValue::If),
        "unless" => keyword(DirectValue::Unless),
        "else" => keyword(DirectValue::Else),
        "elif" => keyword(DirectValue::Elif),
        "while" => keyword(DirectValue::While),
        "do" => keyword(DirectValue::Do),
        "for" => keyword(DirectValue::For),
        "until" => keyword(DirectValue::Until),
        "switch" => keyword(DirectValue::Switch),
        "case" => keyword(DirectValue::Case),
        "default" => keyword(DirectValue::Default),
        "yield" => keyword(DirectValue::Yield),
        "return" => keyword(DirectValue::Return),
        "continue" => keyword(DirectValue::Continue),
        "break" => keyword(DirectValue::Break),
        "redo" => keyword(DirectValue::Redo),
        "try" => keyword(DirectValue::Try),
        "except" => keyword(DirectValue::Except),
        "finally" => keyword(DirectValue::Finally),
        "raise" => keyword(DirectValue::Raise),

        // Declaration keywords
        "super" => keyword(DirectValue::Super),
        "module" => keyword(DirectValue::Module),
        "def" => keyword(DirectValue::Def),
        "lambda" => keyword(DirectValue::Lambda),
        "interface" => keyword(DirectValue::Interface),
        "class" => keyword(DirectValue::Class),
        "generator" => keyword(DirectValue::Generator),
        "BEGIN" => keyword(DirectValue::BEGIN),
        "END" => keyword(DirectValue::END),
        "require" => keyword(DirectValue::Require),
        "delete" => keyword(DirectValue::Delete),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_comparators() {
        assert_eq!(
            keyword_from_str("xor"),
            Some((TokenKind::Comparator, DirectValue::Xor))
        );
        assert_eq!(
            keyword_from_str("as"),
            Some((TokenKind::Comparator, DirectValue::As))
        );
    }

    #[test]
    fn test_constants_are_case_sensitive() {
        assert_eq!(
            keyword_from_str("None"),
            Some((TokenKind::NoneType, DirectValue::None))
        );
        assert_eq!(keyword_from_str("none"), None);
        assert_eq!(keyword_from_str("true"), None);
    }
}
