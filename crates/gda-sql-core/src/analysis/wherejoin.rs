use super::expect_select;
use crate::ast::{ConditionOp, Statement, Where};
use crate::error::Result;

/// A WHERE or join-condition leaf seen as a candidate join predicate.
///
/// Borrows the tree it was extracted from; it never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhereJoin<'a> {
    /// Left operand path (`field` for `between`).
    pub left: &'a [String],
    /// Right operand path (`upper` for `between`).
    pub right: &'a [String],
    /// Operator of the source condition.
    pub op: ConditionOp,
    /// Left for the caller to decide with schema knowledge; always false
    /// here.
    pub is_join: bool,
    /// The left side is a literal rather than a column.
    pub left_constant: bool,
    /// The right side is a literal rather than a column.
    pub right_constant: bool,
    /// The leaf this descriptor was built from.
    pub source: &'a Where,
}

/// Literal constants start with a digit or a single quote.
fn is_constant(path: &[String]) -> bool {
    path.first()
        .and_then(|segment| segment.chars().next())
        .is_some_and(|c| c.is_ascii_digit() || c == '\'')
}

fn from_leaf(leaf: &Where) -> Option<WhereJoin<'_>> {
    let cond = leaf.as_single()?;
    let (left, right) = cond.join_operands();
    let left = left.item.as_name()?;
    let right = right.item.as_name()?;
    Some(WhereJoin {
        left,
        right,
        op: cond.op(),
        is_join: false,
        left_constant: is_constant(left),
        right_constant: is_constant(right),
        source: leaf,
    })
}

/// Collects a descriptor for every leaf of the WHERE tree, then of each
/// FROM entry's join condition. Leaves whose operands are not both names
/// are skipped.
///
/// # Errors
///
/// [`Error::WrongStatementKind`](crate::Error::WrongStatementKind) if
/// `statement` is not a SELECT.
pub fn get_wherejoin(statement: &Statement) -> Result<Vec<WhereJoin<'_>>> {
    let select = expect_select(statement, "get_wherejoin")?;
    let trees = select
        .where_clause
        .iter()
        .chain(select.from.iter().filter_map(|table| table.join_cond.as_ref()));
    Ok(trees
        .flat_map(Where::leaves)
        .filter_map(from_leaf)
        .collect())
}

/// Finds the first leaf, left to right, with an operand name segment equal
/// to `name` (ASCII case-insensitive).
#[must_use]
pub fn search_where<'a>(tree: &'a Where, name: &str) -> Option<&'a Where> {
    tree.leaves().into_iter().find(|leaf| {
        leaf.as_single().is_some_and(|cond| {
            let (left, right) = cond.join_operands();
            [left, right].into_iter().any(|field| {
                field
                    .item
                    .as_name()
                    .is_some_and(|path| path.iter().any(|s| s.eq_ignore_ascii_case(name)))
            })
        })
    })
}

/// Describes the first WHERE leaf that mentions `table`.
///
/// Returns `None` when no leaf mentions it or when the leaf's operands are
/// not both names.
///
/// # Errors
///
/// [`Error::WrongStatementKind`](crate::Error::WrongStatementKind) if
/// `statement` is not a SELECT.
pub fn get_wherejoin_ontable<'a>(
    statement: &'a Statement,
    table: &str,
) -> Result<Option<WhereJoin<'a>>> {
    let select = expect_select(statement, "get_wherejoin_ontable")?;
    Ok(select
        .where_clause
        .as_ref()
        .and_then(|tree| search_where(tree, table))
        .and_then(from_leaf))
}
