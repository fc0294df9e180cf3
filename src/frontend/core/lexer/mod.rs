//! Lexer module
//! Split into the character source, token model, keyword/symbol tables,
//! literal scanning and the tokenizer proper

pub mod keywords;
pub mod literals;
pub mod source;
pub mod symbols;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

// Re-export types
pub use source::{CharSource, StringSource};
pub use tokenizer::Lexer;
pub use tokens::{DirectValue, LexError, Token, TokenKind};

/// Lazily tokenize source code
///
/// The returned lexer is an iterator of `Result<Token, LexError>` that ends
/// with exactly one `Eof` token.
pub fn lex(source: &str) -> Lexer<StringSource> {
    Lexer::new(source)
}

/// Tokenize source code eagerly, `Eof` token included
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tracing::debug!("tokenizing {} bytes", source.len());

    let tokens = lex(source).collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("tokenized into {} tokens", tokens.len());
    Ok(tokens)
}
