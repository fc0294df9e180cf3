//! Pretty printers
//!
//! [`rich`] prints the rich tree back to source text; [`sexpr`] prints the
//! core tree as s-expressions for tests and debug logs.

pub mod rich;
pub mod sexpr;

const INDENT: &str = "  ";

/// Line-oriented output buffer
pub(crate) struct Printer {
    buffer: String,
    indent_level: usize,
}

impl Printer {
    pub(crate) fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Start a new indented line holding `text`
    pub(crate) fn line(
        &mut self,
        text: &str,
    ) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
    }

    /// Append to the current line
    pub(crate) fn write_str(
        &mut self,
        text: &str,
    ) {
        self.buffer.push_str(text);
    }

    pub(crate) fn finish(self) -> String {
        self.buffer
    }
}

/// Join displayable items with `separator`
pub(crate) fn join<T: std::fmt::Display>(
    items: &[T],
    separator: &str,
) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
