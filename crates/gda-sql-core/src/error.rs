//! Error types for parsing and statement analysis.

use crate::ast::StatementKind;
use crate::parser::ParseError;

/// Errors returned by the public operations of this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The text is not a statement the grammar accepts.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// The text holds no statement at all.
    #[error("Empty query to parse")]
    EmptyQuery,

    /// A SELECT-only operation was called on another statement kind.
    #[error("Expected a {expected} statement, found {found}")]
    WrongStatementKind {
        /// The kind the operation works on.
        expected: StatementKind,
        /// The kind it was given.
        found: StatementKind,
    },

    /// The SELECT has no FROM entries.
    #[error("Statement has an empty FROM list")]
    EmptyFromList,
}

/// Result type for statement operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Span;

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyQuery.to_string(), "Empty query to parse");
        let err = Error::WrongStatementKind {
            expected: StatementKind::Select,
            found: StatementKind::Insert,
        };
        assert_eq!(err.to_string(), "Expected a select statement, found insert");
    }

    #[test]
    fn test_parse_error_converts() {
        let err: Error = ParseError::new("Unexpected token", Span::new(0, 1)).into();
        assert_eq!(
            err.to_string(),
            "Parse error: Unexpected token at position 0..1"
        );
    }
}
