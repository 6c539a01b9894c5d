//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer producing the token stream the grammar consumes.
//! Tokens keep their byte span so the parser can recover the exact source
//! text of literals and quoted identifiers.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
