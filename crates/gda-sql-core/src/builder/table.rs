use crate::ast::{Condition, Field, JoinType, SelectStatement, Table, TableKind};

const fn table(kind: TableKind) -> Table {
    Table {
        kind,
        alias: None,
        join_type: JoinType::Cross,
        join_cond: None,
    }
}

/// Builds a plain named table.
#[must_use]
pub fn build_table_simple(name: impl Into<String>) -> Table {
    table(TableKind::Simple(name.into()))
}

/// Builds an explicit `left join right [on cond]` table node.
///
/// The join type is read from `right.join_type`; set it with
/// [`Table::joined`].
#[must_use]
pub fn build_table_join(left: Table, right: Table, cond: Option<Condition>) -> Table {
    table(TableKind::Join {
        left: Box::new(left),
        right: Box::new(right),
        cond,
    })
}

/// Builds a `(select …)` table.
#[must_use]
pub fn build_table_nested_select(select: SelectStatement) -> Table {
    table(TableKind::NestedSelect(Box::new(select)))
}

/// Builds a table-valued function call.
#[must_use]
pub fn build_table_function(name: impl Into<String>, args: Vec<Field>) -> Table {
    table(TableKind::Function {
        name: name.into(),
        args,
    })
}
