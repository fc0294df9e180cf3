//! Character source
//!
//! A forward byte cursor the scanner reads from. The scanner only relies on
//! the [`CharSource`] trait, so hosts may plug in their own buffers.

use crate::frontend::core::lexer::tokens::LexError;
use crate::util::span::Position;

/// Forward cursor over a byte buffer with one byte of lookahead
pub trait CharSource {
    /// Whether at least one byte remains
    fn has_next(&self) -> bool;

    /// Current byte without consuming it
    fn peek(&self) -> Result<u8, LexError>;

    /// Consume the current byte
    fn advance(&mut self) -> Result<(), LexError>;

    /// Step back over the last consumed byte
    fn undo(&mut self);

    /// Zero-based byte offset of the cursor
    fn index(&self) -> usize;

    /// Line/column of the cursor (both 1-indexed)
    fn position(&self) -> Position;
}

/// String-backed character source
#[derive(Debug, Clone)]
pub struct StringSource {
    bytes: Vec<u8>,
    index: usize,
    /// Offsets where each line starts; always contains 0
    line_starts: Vec<usize>,
}

impl StringSource {
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            index: 0,
            line_starts: vec![0],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl CharSource for StringSource {
    fn has_next(&self) -> bool {
        self.index < self.bytes.len()
    }

    fn peek(&self) -> Result<u8, LexError> {
        self.bytes
            .get(self.index)
            .copied()
            .ok_or(LexError::OutOfInput { index: self.index })
    }

    fn advance(&mut self) -> Result<(), LexError> {
        let byte = self.peek()?;
        self.index += 1;
        if byte == b'\n' {
            self.line_starts.push(self.index);
        }
        Ok(())
    }

    fn undo(&mut self) {
        if self.index == 0 {
            return;
        }
        self.index -= 1;
        if self.bytes[self.index] == b'\n' {
            self.line_starts.pop();
        }
    }

    fn index(&self) -> usize {
        self.index
    }

    fn position(&self) -> Position {
        let line_start = self.line_starts.last().copied().unwrap_or(0);
        Position::with_offset(
            self.line_starts.len(),
            self.index - line_start + 1,
            self.index,
        )
    }
}
