#![allow(dead_code)]

use gda_sql_core::ast::{SelectStatement, Statement, StatementBody, Where};
use gda_sql_core::{Error, parse_with_error};

pub fn parse(sql: &str) -> Statement {
    parse_with_error(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> Error {
    parse_with_error(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql).body {
        StatementBody::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn where_of(statement: &Statement) -> &Where {
    statement
        .as_select()
        .and_then(|s| s.where_clause.as_ref())
        .unwrap_or_else(|| panic!("Expected a WHERE clause in {statement}"))
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// string again. Returns the rendered text.
pub fn round_trip(sql: &str) -> String {
    let rendered1 = parse(sql).to_string();
    let rendered2 = parse(&rendered1).to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    rendered1
}
