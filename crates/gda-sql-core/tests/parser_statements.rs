//! Tests for INSERT, UPDATE and DELETE parsing, and for parse failures.

mod common;
use common::*;

use gda_sql_core::ast::{CompareOp, ConditionOp, StatementBody, StatementKind};
use gda_sql_core::{Error, parse_with_error};

#[test]
fn insert_with_fields_and_values() {
    let stmt = parse("INSERT INTO users (name, age) VALUES ('ann', 31)");
    assert_eq!(stmt.kind(), StatementKind::Insert);
    match stmt.body {
        StatementBody::Insert(insert) => {
            assert_eq!(insert.table.simple_name(), Some("users"));
            assert_eq!(insert.fields.len(), 2);
            assert_eq!(insert.values[0].to_string(), "'ann'");
        }
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

#[test]
fn insert_values_only() {
    match parse("INSERT INTO t (1, 2, 3)").body {
        StatementBody::Insert(insert) => {
            assert!(insert.fields.is_empty());
            assert_eq!(insert.values.len(), 3);
        }
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

#[test]
fn update_set_list() {
    match parse("UPDATE accounts SET balance = balance - 10, touched = 1 WHERE id = 7").body {
        StatementBody::Update(update) => {
            assert_eq!(update.set.len(), 2);
            assert_eq!(update.set[0].op(), ConditionOp::Compare(CompareOp::Eq));
            assert_eq!(update.set[0].to_string(), "balance = balance-10");
            assert!(update.where_clause.is_some());
        }
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

#[test]
fn delete_with_where() {
    match parse("DELETE FROM logs WHERE created < '2020-01-01';").body {
        StatementBody::Delete(delete) => {
            assert_eq!(delete.table.simple_name(), Some("logs"));
            assert!(delete.where_clause.is_some());
        }
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

#[test]
fn full_query_is_kept() {
    let sql = "DELETE FROM t";
    assert_eq!(parse(sql).full_query.as_deref(), Some(sql));
}

#[test]
fn empty_input() {
    assert_eq!(parse_err(""), Error::EmptyQuery);
    assert_eq!(parse_err("   \n"), Error::EmptyQuery);
    assert_eq!(parse_err("-- nothing here"), Error::EmptyQuery);
}

#[test]
fn syntax_errors() {
    for sql in [
        "SELECT",
        "SELECT a FROM",
        "SELECT a FROM t WHERE",
        "SELECT a FROM t WHERE a =",
        "SELECT a FROM t WHERE a BETWEEN 1",
        "INSERT INTO t",
        "UPDATE t SET",
        "DELETE t",
        "CREATE TABLE t (a int)",
        "SELECT a FROM t; SELECT b FROM t",
    ] {
        assert!(
            matches!(parse_err(sql), Error::Parse(_)),
            "Expected a syntax error for: {sql}"
        );
    }
}

#[test]
fn error_carries_position() {
    match parse_with_error("SELECT a FROM t WHERE a = = 1") {
        Err(Error::Parse(e)) => {
            assert_eq!(e.span.start, 26);
            assert!(e.to_string().contains("26"));
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn parse_returns_none_on_failure() {
    assert!(gda_sql_core::parse("SELECT a FROM").is_none());
    assert!(gda_sql_core::parse("").is_none());
    assert!(gda_sql_core::parse("SELECT a FROM t").is_some());
}
