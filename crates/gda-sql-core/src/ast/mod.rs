//! Statement tree types.
//!
//! Every node owns its children outright; a tree is never shared or
//! aliased. Rendering back to SQL lives in [`display`](self) through the
//! `fmt::Display` impls, so `node.to_string()` is the stringifier.

mod condition;
mod display;
mod field;
mod statement;
mod table;

pub use condition::{CompareOp, Condition, ConditionOp, LogicOp, Where};
pub use field::{Field, FieldItem, FieldOp, ParamSpec, ParamSpecKind};
pub use statement::{
    DeleteStatement, InsertStatement, OrderDirection, OrderField, SelectStatement, Statement,
    StatementBody, StatementKind, UpdateStatement,
};
pub use table::{JoinType, Table, TableKind};
