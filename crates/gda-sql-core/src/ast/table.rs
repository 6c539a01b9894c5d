//! FROM-list table types.

use super::condition::{Condition, Where};
use super::field::Field;
use super::statement::SelectStatement;

/// How a FROM-list entry is joined to the entries before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    /// Plain comma-separated entry (default).
    #[default]
    Cross,
    /// `join`
    Inner,
    /// `left join`
    Left,
    /// `right join`
    Right,
    /// `full join`
    Full,
}

impl JoinType {
    /// Returns the keyword prefix rendered in front of the table.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Cross => "",
            Self::Inner => " join ",
            Self::Left => " left join ",
            Self::Right => " right join ",
            Self::Full => " full join ",
        }
    }
}

/// The shape of a table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableKind {
    /// A plain table name.
    Simple(String),
    /// An explicit `left join right [on cond]` node.
    Join {
        /// Left side.
        left: Box<Table>,
        /// Right side. Its `join_type` is the type of this join; a
        /// `Cross` right side with a condition renders as a plain `join`.
        right: Box<Table>,
        /// Join condition.
        cond: Option<Condition>,
    },
    /// `(select …)`
    NestedSelect(Box<SelectStatement>),
    /// A table-valued function call.
    Function {
        /// Function name.
        name: String,
        /// Arguments.
        args: Vec<Field>,
    },
}

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// What is referenced.
    pub kind: TableKind,
    /// `AS` alias.
    pub alias: Option<String>,
    /// Join type relative to the preceding FROM-list entries.
    pub join_type: JoinType,
    /// `ON` condition for a joined FROM-list entry.
    pub join_cond: Option<Where>,
}

impl Table {
    /// Adds an alias to this table.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Marks this table as joined to the preceding FROM-list entries.
    #[must_use]
    pub fn joined(mut self, join_type: JoinType, on: Option<Where>) -> Self {
        self.join_type = join_type;
        self.join_cond = on;
        self
    }

    /// Returns the table name for `Simple` tables.
    #[must_use]
    pub fn simple_name(&self) -> Option<&str> {
        match &self.kind {
            TableKind::Simple(name) => Some(name),
            _ => None,
        }
    }
}
