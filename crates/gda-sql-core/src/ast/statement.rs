//! Statement types.

use core::fmt;

use super::condition::{Condition, Where};
use super::field::Field;
use super::table::Table;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderField {
    /// Dotted column path.
    pub name: Vec<String>,
    /// Sort direction.
    pub direction: OrderDirection,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    /// Whether DISTINCT was requested.
    pub distinct: bool,
    /// The select list.
    pub fields: Vec<Field>,
    /// The FROM list.
    pub from: Vec<Table>,
    /// The WHERE tree.
    pub where_clause: Option<Where>,
    /// ORDER BY entries.
    pub order: Vec<OrderField>,
    /// GROUP BY fields.
    pub group: Vec<Field>,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    /// Target table.
    pub table: Table,
    /// Target columns; empty means "all, in table order".
    pub fields: Vec<Field>,
    /// Values to insert.
    pub values: Vec<Field>,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    /// Target table.
    pub table: Table,
    /// SET assignments, each an `=` condition.
    pub set: Vec<Condition>,
    /// The WHERE tree.
    pub where_clause: Option<Where>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatement {
    /// Target table.
    pub table: Table,
    /// The WHERE tree.
    pub where_clause: Option<Where>,
}

/// The statement kind discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT
    Select,
    /// INSERT
    Insert,
    /// UPDATE
    Update,
    /// DELETE
    Delete,
}

impl StatementKind {
    /// Returns the lower-case keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The body of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementBody {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
}

/// A parsed or programmatically built SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The statement tree.
    pub body: StatementBody,
    /// The text this statement was parsed from. Never set for statements
    /// built through the builder, and never updated by mutations.
    pub full_query: Option<String>,
}

impl Statement {
    /// Returns the statement kind.
    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match &self.body {
            StatementBody::Select(_) => StatementKind::Select,
            StatementBody::Insert(_) => StatementKind::Insert,
            StatementBody::Update(_) => StatementKind::Update,
            StatementBody::Delete(_) => StatementKind::Delete,
        }
    }

    /// Returns the SELECT body, if this is a SELECT.
    #[must_use]
    pub const fn as_select(&self) -> Option<&SelectStatement> {
        match &self.body {
            StatementBody::Select(select) => Some(select),
            _ => None,
        }
    }

    /// Returns the SELECT body mutably, if this is a SELECT.
    pub fn as_select_mut(&mut self) -> Option<&mut SelectStatement> {
        match &mut self.body {
            StatementBody::Select(select) => Some(select),
            _ => None,
        }
    }
}
