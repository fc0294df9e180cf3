//! Core algorithm layer
//! Lexer and parser for the rich tree

pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use lexer::{lex, tokenize};
pub use parser::{parse, parse_expression, parse_source};
