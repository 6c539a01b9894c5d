use tracing::trace;

use super::expect_select_mut;
use crate::ast::{CompareOp, Field, LogicOp, Statement, Where};
use crate::builder::{
    build_condition, build_field, build_field_item_name, build_table_simple, build_where_pair,
    build_where_single,
};
use crate::error::Result;

fn column(path: &[&str]) -> Field {
    build_field(
        build_field_item_name(path.iter().map(|s| (*s).to_string()).collect()),
        None,
        vec![],
    )
}

/// Turns operand text into a field the way the parser would: literals and
/// calls stay whole, names split into their dotted path.
fn operand(text: &str) -> Field {
    let literal = text.starts_with(|c: char| c.is_ascii_digit() || c == '\'' || c == '-')
        || text.contains('(');
    if literal {
        return column(&[text]);
    }

    let mut path = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '.' if !quoted => {
                path.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    path.push(&text[start..]);
    column(&path)
}

/// Appends `[table.]field [as alias]` to the select list.
///
/// # Errors
///
/// [`Error::WrongStatementKind`](crate::Error::WrongStatementKind) if
/// `statement` is not a SELECT.
pub fn append_field(
    statement: &mut Statement,
    table: Option<&str>,
    field: &str,
    alias: Option<&str>,
) -> Result<()> {
    let select = expect_select_mut(statement, "append_field")?;
    let path: Vec<&str> = table.into_iter().chain([field]).collect();
    let mut field = column(&path);
    field.alias = alias.map(str::to_string);
    select.fields.push(field);
    Ok(())
}

/// Adds `right_table` to the FROM list and ANDs
/// `left_table.left_field = right_table.right_field` onto the WHERE tree.
///
/// # Errors
///
/// [`Error::WrongStatementKind`](crate::Error::WrongStatementKind) if
/// `statement` is not a SELECT.
pub fn append_tablejoin(
    statement: &mut Statement,
    left_table: &str,
    right_table: &str,
    left_field: &str,
    right_field: &str,
) -> Result<()> {
    let select = expect_select_mut(statement, "append_tablejoin")?;
    let join = build_where_single(build_condition(
        column(&[left_table, left_field]),
        CompareOp::Eq,
        column(&[right_table, right_field]),
    ));

    select.from.push(build_table_simple(right_table));
    select.where_clause = Some(match select.where_clause.take() {
        Some(existing) => build_where_pair(existing, join, LogicOp::And),
        None => join,
    });
    Ok(())
}

/// Adds `left op right` to the WHERE tree with the given connective.
/// Dotted operands such as `b.id` become the same path the parser builds.
///
/// Without `right`, the condition becomes `left is NULL` when `op` is
/// `Eq` or `Like`, and `left not NULL` otherwise.
///
/// An AND append splits the tree at the first OR pair on the right spine,
/// so the OR group stays one operand. Otherwise the rightmost leaf is
/// replaced by a pair of itself and the new condition.
///
/// # Errors
///
/// [`Error::WrongStatementKind`](crate::Error::WrongStatementKind) if
/// `statement` is not a SELECT.
pub fn append_where(
    statement: &mut Statement,
    left: &str,
    right: Option<&str>,
    logic: LogicOp,
    op: CompareOp,
) -> Result<()> {
    let select = expect_select_mut(statement, "append_where")?;
    let (op, right) = match right {
        Some(right) => (op, right),
        None if matches!(op, CompareOp::Eq | CompareOp::Like) => (CompareOp::Is, "NULL"),
        None => (CompareOp::Not, "NULL"),
    };
    let condition = build_where_single(build_condition(operand(left), op, operand(right)));

    if let Some(root) = select.where_clause.as_mut() {
        insert_condition(root, condition, logic);
    } else {
        trace!("condition becomes the whole where clause");
        select.where_clause = Some(condition);
    }
    Ok(())
}

fn insert_condition(root: &mut Where, condition: Where, logic: LogicOp) {
    if logic == LogicOp::And {
        if let Some(or_pair) = first_or_on_right_spine(root) {
            trace!("and-append split at or group");
            let group = Where::take(or_pair);
            *or_pair = build_where_pair(group, condition, LogicOp::And);
            return;
        }
    }

    trace!(logic = logic.as_str(), "append at rightmost leaf");
    let leaf = rightmost_leaf(root);
    let existing = Where::take(leaf);
    *leaf = build_where_pair(existing, condition, logic);
}

fn first_or_on_right_spine(node: &mut Where) -> Option<&mut Where> {
    if matches!(node, Where::Pair { logic: LogicOp::Or, .. }) {
        return Some(node);
    }
    match node {
        Where::Pair { right, .. } => first_or_on_right_spine(right),
        _ => None,
    }
}

/// The first non-pair node down the right spine; `Negated` counts as a leaf.
fn rightmost_leaf(node: &mut Where) -> &mut Where {
    match node {
        Where::Pair { right, .. } => rightmost_leaf(right),
        leaf => leaf,
    }
}
