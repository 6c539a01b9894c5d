use crate::ast::{
    Condition, DeleteStatement, Field, InsertStatement, OrderDirection, OrderField,
    SelectStatement, Statement, StatementBody, Table, UpdateStatement, Where,
};

/// Wraps a statement body. `full_query` is left empty; only the parser
/// records source text.
#[must_use]
pub const fn build_statement(body: StatementBody) -> Statement {
    Statement {
        body,
        full_query: None,
    }
}

/// Builds a SELECT body.
#[must_use]
pub const fn build_select_statement(
    distinct: bool,
    fields: Vec<Field>,
    from: Vec<Table>,
    where_clause: Option<Where>,
    order: Vec<OrderField>,
    group: Vec<Field>,
) -> SelectStatement {
    SelectStatement {
        distinct,
        fields,
        from,
        where_clause,
        order,
        group,
    }
}

/// Builds an INSERT body. `fields` may be empty.
#[must_use]
pub const fn build_insert_statement(
    table: Table,
    fields: Vec<Field>,
    values: Vec<Field>,
) -> InsertStatement {
    InsertStatement {
        table,
        fields,
        values,
    }
}

/// Builds an UPDATE body.
#[must_use]
pub const fn build_update_statement(
    table: Table,
    set: Vec<Condition>,
    where_clause: Option<Where>,
) -> UpdateStatement {
    UpdateStatement {
        table,
        set,
        where_clause,
    }
}

/// Builds a DELETE body.
#[must_use]
pub const fn build_delete_statement(table: Table, where_clause: Option<Where>) -> DeleteStatement {
    DeleteStatement {
        table,
        where_clause,
    }
}

/// Builds an ORDER BY entry.
#[must_use]
pub const fn build_order_field(name: Vec<String>, direction: OrderDirection) -> OrderField {
    OrderField { name, direction }
}
