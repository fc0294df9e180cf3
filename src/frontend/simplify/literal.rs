//! Literal resolution and constant folding
//!
//! Integer and float parsing, string delimiter removal, escape expansion and
//! the binary fold table.

use crate::frontend::config::EscapeMode;
use crate::frontend::core::lexer::tokens::DirectValue;
use crate::frontend::simplify::ast::{BinaryOperator, Expression};

/// Repetition folds producing more bytes than this stay unfolded
pub const MAX_FOLDED_REPEAT_LEN: usize = 1 << 20;

/// Parse an integer literal in any base into a wrapping 64-bit value
///
/// Underscores are ignored and the radix follows the `0x`/`0b`/`0o` prefix.
pub fn parse_integer(text: &str) -> i64 {
    let lower = text.to_ascii_lowercase();
    let (radix, digits) = match lower.get(..2) {
        Some("0x") => (16, &lower[2..]),
        Some("0b") => (2, &lower[2..]),
        Some("0o") => (8, &lower[2..]),
        _ => (10, lower.as_str()),
    };

    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, digit| {
            acc.wrapping_mul(i64::from(radix))
                .wrapping_add(i64::from(digit))
        })
}

/// Parse a float literal, underscores ignored
pub fn parse_float(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    cleaned.parse().unwrap_or(f64::NAN)
}

/// Strip the delimiters of a quoted literal; byte strings drop their `b` too
pub fn unquote(
    text: &str,
    value: DirectValue,
) -> &[u8] {
    let bytes = text.as_bytes();
    let open = if value == DirectValue::ByteString { 2 } else { 1 };
    if bytes.len() < open + 1 {
        return &[];
    }
    &bytes[open..bytes.len() - 1]
}

/// Expand backslash escapes
///
/// Unknown escapes, `\e` and `\?` are kept verbatim, as are `\x`/`\u`
/// escapes without enough following digits.
///
/// In [`EscapeMode::Compatible`] the digit bytes are summed positionally
/// without hex conversion. `\x` keeps the low byte of that sum since it
/// stands for a single byte; `\u` encodes the whole sum as a code point.
pub fn expand_escapes(
    raw: &[u8],
    mode: EscapeMode,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        if raw[i] != b'\\' || i + 1 >= raw.len() {
            out.push(raw[i]);
            i += 1;
            continue;
        }

        let escape = raw[i + 1];
        let simple = match escape {
            b'a' => Some(0x07),
            b'b' => Some(0x08),
            b'f' => Some(0x0c),
            b'n' => Some(b'\n'),
            b'r' => Some(b'\r'),
            b't' => Some(b'\t'),
            b'\\' | b'\'' | b'"' | b'`' => Some(escape),
            _ => None,
        };
        if let Some(byte) = simple {
            out.push(byte);
            i += 2;
            continue;
        }

        let digits = &raw[i + 2..];
        match escape {
            b'x' => match decode_digits(digits, 2, mode) {
                Some(value) => {
                    // `\x` always yields one byte, so a compatible sum above 0xff
                    // keeps its low bits; `\u` yields a whole code point instead
                    out.push(value as u8);
                    i += 4;
                }
                None => {
                    out.extend_from_slice(&raw[i..i + 2]);
                    i += 2;
                }
            },
            b'u' => match decode_digits(digits, 4, mode) {
                Some(value) => {
                    let ch = char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER);
                    let mut buffer = [0u8; 4];
                    out.extend_from_slice(ch.encode_utf8(&mut buffer).as_bytes());
                    i += 6;
                }
                None => {
                    out.extend_from_slice(&raw[i..i + 2]);
                    i += 2;
                }
            },
            _ => {
                out.extend_from_slice(&raw[i..i + 2]);
                i += 2;
            }
        }
    }

    out
}

/// Combine `count` digit bytes positionally in base 16
fn decode_digits(
    digits: &[u8],
    count: usize,
    mode: EscapeMode,
) -> Option<u32> {
    let digits = digits.get(..count)?;
    digits.iter().try_fold(0u32, |acc, &digit| {
        let value = match mode {
            EscapeMode::Compatible => u32::from(digit),
            EscapeMode::Hex => char::from(digit).to_digit(16)?,
        };
        Some(acc * 16 + value)
    })
}

/// Fold a binary operation over two literal operands
///
/// Returns `None` when the operand kinds or values fall outside the fold
/// table; the caller keeps the `Binary` node then.
pub fn fold_binary(
    operator: BinaryOperator,
    left: &Expression,
    right: &Expression,
) -> Option<Expression> {
    use BinaryOperator as Op;
    use Expression::{Bytes, Float, Integer, String as Str};

    if !left.is_literal() || !right.is_literal() {
        return None;
    }

    let folded = match (operator, left, right) {
        (Op::Equals, _, _) => boolean(literals_equal(left, right)?),
        (Op::NotEqual, _, _) => boolean(!literals_equal(left, right)?),

        (Op::LessThan, Integer(l), Integer(r)) => boolean(l < r),
        (Op::LessThan, Float(l), Float(r)) => boolean(l < r),
        (Op::LessOrEqual, Integer(l), Integer(r)) => boolean(l <= r),
        (Op::LessOrEqual, Float(l), Float(r)) => boolean(l <= r),
        (Op::GreaterThan, Integer(l), Integer(r)) => boolean(l > r),
        (Op::GreaterThan, Float(l), Float(r)) => boolean(l > r),
        (Op::GreaterOrEqual, Integer(l), Integer(r)) => boolean(l >= r),
        (Op::GreaterOrEqual, Float(l), Float(r)) => boolean(l >= r),

        (Op::BitwiseOr, Integer(l), Integer(r)) => Integer(l | r),
        (Op::BitwiseXor, Integer(l), Integer(r)) => Integer(l ^ r),
        (Op::BitwiseAnd, Integer(l), Integer(r)) => Integer(l & r),
        (Op::ShiftLeft, Integer(l), Integer(r)) => Integer(l.checked_shl(shift_amount(*r)?)?),
        (Op::ShiftRight, Integer(l), Integer(r)) => Integer(l.checked_shr(shift_amount(*r)?)?),
        (Op::Mod, Integer(l), Integer(r)) => Integer(l.checked_rem(*r).or_else(|| {
            // i64::MIN % -1
            (*r == -1).then_some(0)
        })?),

        (Op::Add, Integer(l), Integer(r)) => Integer(l.wrapping_add(*r)),
        (Op::Add, Float(l), Float(r)) => Float(l + r),
        (Op::Add, Str(l), Str(r)) => Str(concat(l, r)),
        (Op::Add, Bytes(l), Bytes(r)) => Bytes(concat(l, r)),
        (Op::Sub, Integer(l), Integer(r)) => Integer(l.wrapping_sub(*r)),
        (Op::Sub, Float(l), Float(r)) => Float(l - r),

        (Op::Mul, Integer(l), Integer(r)) => Integer(l.wrapping_mul(*r)),
        (Op::Mul, Float(l), Float(r)) => Float(l * r),
        (Op::Mul, Str(text), Integer(count)) | (Op::Mul, Integer(count), Str(text)) => {
            Str(repeat(text, *count)?)
        }
        (Op::Mul, Bytes(bytes), Integer(count)) | (Op::Mul, Integer(count), Bytes(bytes)) => {
            Bytes(repeat(bytes, *count)?)
        }

        // Both divisions truncate on integers
        (Op::Div | Op::FloorDiv, Integer(l), Integer(r)) => {
            if *r == 0 {
                return None;
            }
            Integer(l.wrapping_div(*r))
        }
        (Op::Div, Float(l), Float(r)) => Float(l / r),
        (Op::FloorDiv, Float(l), Float(r)) => Float((l / r).floor()),

        (Op::Pow, Float(l), Float(r)) => Float(l.powf(*r)),

        _ => return None,
    };

    Some(folded)
}

fn boolean(value: bool) -> Expression {
    if value {
        Expression::True
    } else {
        Expression::False
    }
}

/// Byte-wise equality of two literals of one kind, `None` across kinds
fn literals_equal(
    left: &Expression,
    right: &Expression,
) -> Option<bool> {
    use Expression::*;

    match (left, right) {
        (Integer(l), Integer(r)) => Some(l == r),
        (Float(l), Float(r)) => Some(l.to_bits() == r.to_bits()),
        (String(l), String(r)) | (Bytes(l), Bytes(r)) => Some(l == r),
        (True | False, True | False) => Some(left == right),
        (None, None) => Some(true),
        _ => Option::None,
    }
}

fn shift_amount(amount: i64) -> Option<u32> {
    u32::try_from(amount).ok().filter(|amount| *amount < 64)
}

fn concat(
    left: &[u8],
    right: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    out.extend_from_slice(left);
    out.extend_from_slice(right);
    out
}

/// Repeat `bytes` `count` times; negative counts give an empty result
fn repeat(
    bytes: &[u8],
    count: i64,
) -> Option<Vec<u8>> {
    let count = usize::try_from(count.max(0)).ok()?;
    if bytes.len().checked_mul(count)? > MAX_FOLDED_REPEAT_LEN {
        return None;
    }
    Some(bytes.repeat(count))
}
