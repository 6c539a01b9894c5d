//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! [`parse_with_error`] is the entry point; the grammar builds every node
//! through [`crate::builder`].

mod error;
mod parser;
mod pratt;

pub use error::ParseError;
pub use parser::Parser;

use tracing::{debug, error};

use crate::ast::Statement;
use crate::error::{Error, Result};
use crate::lexer::Lexer;

/// Parses one statement and records `text` as its `full_query`.
///
/// # Errors
///
/// Returns [`Error::EmptyQuery`] when `text` holds only whitespace or
/// comments, and [`Error::Parse`] when the grammar rejects it.
pub fn parse_with_error(text: &str) -> Result<Statement> {
    if Lexer::new(text).next_token().is_eof() {
        return Err(Error::EmptyQuery);
    }

    let mut statement = Parser::new(text).parse_statement()?;
    statement.full_query = Some(text.to_string());
    debug!(kind = %statement.kind(), "parsed statement");
    Ok(statement)
}

/// Parses one statement, logging the error instead of returning it.
#[must_use]
pub fn parse(text: &str) -> Option<Statement> {
    match parse_with_error(text) {
        Ok(statement) => Some(statement),
        Err(e) => {
            error!(error = %e, "failed to parse statement");
            None
        }
    }
}
