//! Explicit teardown.
//!
//! Trees own their nodes, so dropping a [`Statement`] releases every node
//! and its `full_query` text. These functions give that step a name for
//! callers that want it spelled out.

use tracing::trace;

use crate::analysis::WhereJoin;
use crate::ast::Statement;

/// Releases a statement and everything it owns.
pub fn destroy(statement: Statement) {
    trace!(kind = %statement.kind(), "releasing statement");
    drop(statement);
}

/// Releases wherejoin descriptors. The tree they borrow from is untouched.
pub fn free_wherejoin(joins: Vec<WhereJoin<'_>>) {
    trace!(count = joins.len(), "releasing wherejoin descriptors");
    drop(joins);
}
