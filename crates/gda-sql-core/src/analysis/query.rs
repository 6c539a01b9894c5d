use super::expect_select;
use crate::ast::{Statement, Table};
use crate::error::{Error, Result};

/// Name used for a FROM entry: the bare name of simple tables, the
/// rendered entry otherwise.
fn table_name(table: &Table) -> String {
    table
        .simple_name()
        .map_or_else(|| table.to_string().trim().to_string(), str::to_string)
}

/// Renders each select-list field, in source order.
///
/// # Errors
///
/// [`Error::WrongStatementKind`] if `statement` is not a SELECT.
pub fn get_fields(statement: &Statement) -> Result<Vec<String>> {
    let select = expect_select(statement, "get_fields")?;
    Ok(select.fields.iter().map(ToString::to_string).collect())
}

/// Names each FROM entry, in source order.
///
/// # Errors
///
/// [`Error::WrongStatementKind`] if `statement` is not a SELECT.
pub fn get_tables(statement: &Statement) -> Result<Vec<String>> {
    let select = expect_select(statement, "get_tables")?;
    Ok(select.from.iter().map(table_name).collect())
}

/// Names the first FROM entry.
///
/// # Errors
///
/// [`Error::WrongStatementKind`] if `statement` is not a SELECT, and
/// [`Error::EmptyFromList`] if it has no FROM entries.
pub fn get_first_table(statement: &Statement) -> Result<String> {
    let select = expect_select(statement, "get_first_table")?;
    select
        .from
        .first()
        .map(table_name)
        .ok_or(Error::EmptyFromList)
}
