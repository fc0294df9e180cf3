//! Literal scanning implementations
//! Handles numeric literals (decimal, hexadecimal, octal, binary, float,
//! scientific) and quoted literals (strings, byte strings, command output)

use unicode_ident::{is_xid_continue, is_xid_start};

use super::source::CharSource;
use super::tokenizer::Lexer;
use crate::frontend::core::lexer::tokens::*;

/// Scan a number literal; the cursor sits on its first digit
pub fn scan_number<S: CharSource>(lexer: &mut Lexer<S>) -> Result<Token, LexError> {
    let first = lexer.bump()?;

    if first == b'0' {
        match lexer.peek() {
            Some(b'x' | b'X') => {
                return scan_prefixed_number(
                    lexer,
                    DirectValue::HexadecimalInteger,
                    is_hex_digit,
                )
            }
            Some(b'b' | b'B') => {
                return scan_prefixed_number(lexer, DirectValue::BinaryInteger, is_binary_digit)
            }
            Some(b'o' | b'O') => {
                return scan_prefixed_number(lexer, DirectValue::OctalInteger, is_octal_digit)
            }
            _ => {}
        }
    }

    scan_decimal_number(lexer)
}

/// Scan the digits following a `0x`/`0b`/`0o` prefix
fn scan_prefixed_number<S: CharSource>(
    lexer: &mut Lexer<S>,
    value: DirectValue,
    is_base_digit: fn(u8) -> bool,
) -> Result<Token, LexError> {
    lexer.bump()?; // consume base letter

    let mut has_digits = false;
    while let Some(c) = lexer.peek() {
        if is_base_digit(c) {
            has_digits = true;
            lexer.bump()?;
        } else if c == b'_' {
            lexer.bump()?;
        } else {
            break;
        }
    }

    if !has_digits {
        return Err(lexer.invalid_number());
    }

    finish_number(lexer, value)
}

/// Scan a decimal integer with optional fraction and exponent
fn scan_decimal_number<S: CharSource>(lexer: &mut Lexer<S>) -> Result<Token, LexError> {
    let mut value = DirectValue::Integer;
    scan_digit_run(lexer)?;

    // Fraction only when the dot is followed by a digit: `1.foo` is a selector
    if lexer.peek() == Some(b'.') {
        lexer.bump()?;
        if lexer.peek().is_some_and(is_digit) {
            scan_digit_run(lexer)?;
            value = DirectValue::Float;
        } else {
            lexer.unbump();
        }
    }

    if matches!(lexer.peek(), Some(b'e' | b'E')) {
        lexer.bump()?;
        if matches!(lexer.peek(), Some(b'+' | b'-')) {
            lexer.bump()?;
        }
        if !lexer.peek().is_some_and(is_digit) {
            return Err(lexer.invalid_number());
        }
        scan_digit_run(lexer)?;
        value = DirectValue::ScientificFloat;
    }

    finish_number(lexer, value)
}

/// Consume decimal digits and separating underscores
fn scan_digit_run<S: CharSource>(lexer: &mut Lexer<S>) -> Result<(), LexError> {
    while let Some(c) = lexer.peek() {
        if is_digit(c) || c == b'_' {
            lexer.bump()?;
        } else {
            break;
        }
    }
    Ok(())
}

/// Reject literals glued to identifier characters (`0b102`, `12ab`)
fn finish_number<S: CharSource>(
    lexer: &mut Lexer<S>,
    value: DirectValue,
) -> Result<Token, LexError> {
    if lexer.peek().is_some_and(is_identifier_char) {
        lexer.bump()?;
        return Err(lexer.invalid_number());
    }
    lexer.make_token(TokenKind::Literal, value)
}

/// Scan a quoted literal; the opening delimiter (and `b` prefix) is already consumed
///
/// A backslash escapes whatever follows it, newlines are kept verbatim.
pub fn scan_quoted<S: CharSource>(
    lexer: &mut Lexer<S>,
    quote: u8,
    value: DirectValue,
) -> Result<Token, LexError> {
    loop {
        if !lexer.has_more() {
            return Err(lexer.unterminated_string());
        }
        let c = lexer.bump()?;
        if c == b'\\' {
            if !lexer.has_more() {
                return Err(lexer.unterminated_string());
            }
            lexer.bump()?;
        } else if c == quote {
            break;
        }
    }
    lexer.make_token(TokenKind::Literal, value)
}

/// Literal category opened by a quote byte
pub fn quote_value(quote: u8) -> Option<DirectValue> {
    match quote {
        b'\'' => Some(DirectValue::SingleQuoteString),
        b'"' => Some(DirectValue::DoubleQuoteString),
        b'`' => Some(DirectValue::CommandOutput),
        _ => None,
    }
}

/// Check if byte can start an identifier
pub fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

/// Check if byte is valid identifier continuation
pub fn is_identifier_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Check if a non-ASCII character can start an identifier
pub fn is_identifier_start_char(ch: char) -> bool {
    ch == '_' || is_xid_start(ch)
}

/// Check if a non-ASCII character can continue an identifier
pub fn is_identifier_continue_char(ch: char) -> bool {
    ch == '_' || is_xid_continue(ch)
}

/// Check if byte is a digit
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Check if byte is a hexadecimal digit
pub fn is_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

fn is_octal_digit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

fn is_binary_digit(c: u8) -> bool {
    c == b'0' || c == b'1'
}
