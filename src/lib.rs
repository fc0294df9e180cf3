//! Quill front end
//!
//! Scanner, parser, use-checker and simplifier for the Quill scripting
//! language. Source text becomes a rich syntax tree that keeps every surface
//! construct, which is then lowered into a small core tree.
//!
//! # Example
//!
//! ```rust
//! use quill::{parse_source, simplify};
//!
//! let program = parse_source("a = 1 + 2 * 3").unwrap();
//! assert_eq!(simplify(program).to_string(), "(= a 7)");
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::check::{check, CheckReport};
pub use frontend::config::{EscapeMode, FrontendConfig};
pub use frontend::core::lexer::{lex, tokenize, LexError, Token};
pub use frontend::core::parser::{parse, parse_expression, parse_source, ParseError};
pub use frontend::pipeline::{Compilation, Frontend, FrontendError};
pub use frontend::simplify::{simplify, Simplifier};

/// Front end version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Quill";

/// Run the whole front end on `source` with the default configuration
pub fn compile(source: &str) -> Result<Compilation, FrontendError> {
    Frontend::default().compile(source)
}
