//! Structural queries and in-place edits of parsed statements.
//!
//! Every operation here works on SELECT statements only. Calling one on
//! another statement kind returns [`Error::WrongStatementKind`] and leaves
//! the statement untouched.

mod append;
mod query;
mod wherejoin;

pub use append::{append_field, append_tablejoin, append_where};
pub use query::{get_fields, get_first_table, get_tables};
pub use wherejoin::{WhereJoin, get_wherejoin, get_wherejoin_ontable, search_where};

use tracing::warn;

use crate::ast::{SelectStatement, Statement, StatementKind};
use crate::error::{Error, Result};

fn refuse(operation: &'static str, found: StatementKind) -> Error {
    warn!(operation, %found, "operation requires a select statement");
    Error::WrongStatementKind {
        expected: StatementKind::Select,
        found,
    }
}

fn expect_select<'a>(
    statement: &'a Statement,
    operation: &'static str,
) -> Result<&'a SelectStatement> {
    statement
        .as_select()
        .ok_or_else(|| refuse(operation, statement.kind()))
}

fn expect_select_mut<'a>(
    statement: &'a mut Statement,
    operation: &'static str,
) -> Result<&'a mut SelectStatement> {
    let found = statement.kind();
    statement
        .as_select_mut()
        .ok_or_else(|| refuse(operation, found))
}
