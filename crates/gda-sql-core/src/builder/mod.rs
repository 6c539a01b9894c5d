//! Node constructors.
//!
//! One function per node kind. Every constructor takes ownership of the
//! children it is given and performs no validation beyond what the types
//! encode: an empty FROM list or an empty value list is accepted as is.
//! The parser creates every node through these functions, and so do the
//! mutations in [`crate::analysis`].
//!
//! ```rust
//! use gda_sql_core::builder::*;
//! use gda_sql_core::ast::{CompareOp, StatementBody};
//!
//! let select = build_select_statement(
//!     false,
//!     vec![build_field(build_field_item_name(vec!["a".into()]), None, vec![])],
//!     vec![build_table_simple("t")],
//!     Some(build_where_single(build_condition(
//!         build_field(build_field_item_name(vec!["a".into()]), None, vec![]),
//!         CompareOp::Eq,
//!         build_field(build_field_item_name(vec!["1".into()]), None, vec![]),
//!     ))),
//!     vec![],
//!     vec![],
//! );
//! let stmt = build_statement(StatementBody::Select(select));
//! assert_eq!(stmt.to_string(), "select a from t where (a = 1)");
//! assert!(stmt.full_query.is_none());
//! ```

mod condition;
mod field;
mod statement;
mod table;

pub use condition::{
    build_condition, build_condition_between, build_where_negated, build_where_pair,
    build_where_single,
};
pub use field::{
    build_field, build_field_item_equation, build_field_item_function,
    build_field_item_inline_select, build_field_item_name, build_param_spec,
};
pub use statement::{
    build_delete_statement, build_insert_statement, build_order_field, build_select_statement,
    build_statement, build_update_statement,
};
pub use table::{
    build_table_function, build_table_join, build_table_nested_select, build_table_simple,
};
