//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::keywords::keyword_from_str;
use super::literals::{
    is_digit, is_identifier_char, is_identifier_continue_char, is_identifier_start,
    is_identifier_start_char, quote_value, scan_number, scan_quoted,
};
use super::source::{CharSource, StringSource};
use super::symbols::{is_symbol_prefix, lookup_symbol};
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Main lexer structure
///
/// Produces one token per [`Lexer::next_token`] call. Whitespace and comments
/// are dropped; once input is exhausted an `Eof` token with empty text is
/// returned on every call.
pub struct Lexer<S: CharSource = StringSource> {
    source: S,
    /// Start of the token being scanned
    start: Position,
    /// Bytes of the token being scanned
    buffer: Vec<u8>,
    eof_emitted: bool,
    failed: bool,
}

impl Lexer<StringSource> {
    /// Create a new lexer for the given source
    pub fn new(source: &str) -> Self {
        Self::from_source(StringSource::new(source))
    }
}

impl<S: CharSource> Lexer<S> {
    /// Create a lexer over any character source
    pub fn from_source(source: S) -> Self {
        let start = source.position();
        Self {
            source,
            start,
            buffer: Vec::new(),
            eof_emitted: false,
            failed: false,
        }
    }

    /// False only once the `Eof` token has been delivered
    pub fn has_next(&self) -> bool {
        !self.eof_emitted
    }

    /// Get current position
    pub fn position(&self) -> Position {
        self.source.position()
    }

    /// Whether unread input remains
    pub(crate) fn has_more(&self) -> bool {
        self.source.has_next()
    }

    /// Peek at next byte
    pub(crate) fn peek(&self) -> Option<u8> {
        if self.source.has_next() {
            self.source.peek().ok()
        } else {
            None
        }
    }

    /// Consume a byte into the current token
    pub(crate) fn bump(&mut self) -> Result<u8, LexError> {
        let c = self.source.peek()?;
        self.source.advance()?;
        self.buffer.push(c);
        Ok(c)
    }

    /// Give back the last consumed byte
    pub(crate) fn unbump(&mut self) {
        self.source.undo();
        self.buffer.pop();
    }

    /// Consume one UTF-8 encoded character into the current token
    fn bump_char(&mut self) -> Result<char, LexError> {
        let mark = self.buffer.len();
        let lead = self.bump()?;
        let width = match lead {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        for _ in 1..width {
            match self.peek() {
                Some(c) if c & 0xC0 == 0x80 => {
                    self.bump()?;
                }
                _ => break,
            }
        }
        std::str::from_utf8(&self.buffer[mark..])
            .ok()
            .and_then(|decoded| decoded.chars().next())
            .ok_or(LexError::InvalidUtf8 {
                position: self.start,
            })
    }

    /// Give back a character taken by [`Lexer::bump_char`]
    fn unbump_char(
        &mut self,
        ch: char,
    ) {
        for _ in 0..ch.len_utf8() {
            self.unbump();
        }
    }

    /// Consume a byte that is not part of any token
    fn skip(&mut self) -> Result<(), LexError> {
        self.source.advance()
    }

    /// Create token from the scanned bytes
    pub(crate) fn make_token(
        &mut self,
        kind: TokenKind,
        value: DirectValue,
    ) -> Result<Token, LexError> {
        let bytes = std::mem::take(&mut self.buffer);
        let text = String::from_utf8(bytes).map_err(|_| LexError::InvalidUtf8 {
            position: self.start,
        })?;
        Ok(Token::new(
            text,
            kind,
            value,
            Span::new(self.start, self.source.position()),
        ))
    }

    pub(crate) fn invalid_number(&self) -> LexError {
        LexError::InvalidNumber {
            literal: String::from_utf8_lossy(&self.buffer).into_owned(),
            position: self.start,
        }
    }

    pub(crate) fn unterminated_string(&self) -> LexError {
        LexError::UnterminatedString {
            position: self.start,
        }
    }

    /// Skip blanks, comments and line continuations
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\t' | b'\r' => self.skip()?,
                b'#' => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.skip()?;
                    }
                }
                b'\\' => {
                    self.skip()?;
                    if self.peek() == Some(b'\r') {
                        self.skip()?;
                    }
                    if self.peek() == Some(b'\n') {
                        self.skip()?;
                    } else {
                        return Err(LexError::UnexpectedChar {
                            ch: '\\',
                            position: self.start,
                        });
                    }
                }
                _ => break,
            }
            self.start = self.source.position();
        }
        Ok(())
    }

    /// Generate next token
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.buffer.clear();
        self.start = self.source.position();
        self.skip_trivia()?;
        self.start = self.source.position();

        let Some(c) = self.peek() else {
            self.eof_emitted = true;
            return Ok(Token::eof(self.start));
        };

        match c {
            b'\n' => {
                self.bump()?;
                self.make_token(TokenKind::Separator, DirectValue::NewLine)
            }
            b'b' => {
                self.bump()?;
                match self.peek() {
                    Some(quote @ (b'\'' | b'"')) => {
                        self.bump()?;
                        scan_quoted(self, quote, DirectValue::ByteString)
                    }
                    _ => self.scan_identifier(),
                }
            }
            c if is_identifier_start(c) => {
                self.bump()?;
                self.scan_identifier()
            }
            c if !c.is_ascii() => {
                let ch = self.bump_char()?;
                if !is_identifier_start_char(ch) {
                    return Err(LexError::UnexpectedChar {
                        ch,
                        position: self.start,
                    });
                }
                self.scan_identifier()
            }
            c if is_digit(c) => scan_number(self),
            b'\'' | b'"' | b'`' => {
                self.bump()?;
                let value = quote_value(c).unwrap_or(DirectValue::InvalidDirectValue);
                scan_quoted(self, c, value)
            }
            _ => self.scan_symbol(c),
        }
    }

    /// Scan identifier token; the first byte is already consumed
    fn scan_identifier(&mut self) -> Result<Token, LexError> {
        while let Some(c) = self.peek() {
            if c.is_ascii() {
                if !is_identifier_char(c) {
                    break;
                }
                self.bump()?;
            } else {
                let ch = self.bump_char()?;
                if !is_identifier_continue_char(ch) {
                    self.unbump_char(ch);
                    break;
                }
            }
        }

        let reclassified = {
            let word = String::from_utf8_lossy(&self.buffer);
            keyword_from_str(&word)
        };
        match reclassified {
            Some((kind, value)) => self.make_token(kind, value),
            None => self.make_token(TokenKind::Identifier, DirectValue::InvalidDirectValue),
        }
    }

    /// Longest-match scan against the symbol table
    fn scan_symbol(
        &mut self,
        first: u8,
    ) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first as char);
        if !is_symbol_prefix(&text) {
            return Err(LexError::UnexpectedChar {
                ch: first as char,
                position: self.start,
            });
        }
        self.bump()?;

        while let Some(c) = self.peek() {
            text.push(c as char);
            if !is_symbol_prefix(&text) {
                text.pop();
                break;
            }
            self.bump()?;
        }

        // Back off until the consumed text is itself a symbol
        while lookup_symbol(&text).is_none() && text.len() > 1 {
            text.pop();
            self.unbump();
        }

        match lookup_symbol(&text) {
            Some((kind, value)) => self.make_token(kind, value),
            None => Err(LexError::UnexpectedChar {
                ch: first as char,
                position: self.start,
            }),
        }
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Result<Token, LexError>;

    /// Yields every token including the final `Eof`, then stops; stops
    /// right after the first error as well
    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted || self.failed {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) => tracing::trace!(
                "token {:?}/{:?} {:?} at {}",
                token.kind,
                token.value,
                token.text,
                token.position()
            ),
            Err(_) => self.failed = true,
        }
        Some(result)
    }
}
