//! # gda-sql-core
//!
//! A SQL statement tree for SELECT, INSERT, UPDATE and DELETE.
//!
//! This crate provides:
//! - A hand-written recursive descent parser with Pratt expression parsing
//! - Rendering back to SQL through `Display`, stable after one round trip
//! - Structural queries and edits on SELECT statements
//! - An indented debug dump of any tree
//!
//! ## Parsing and Rendering
//!
//! ```rust
//! use gda_sql_core::parse_with_error;
//!
//! let stmt = parse_with_error("SELECT a, b FROM t WHERE a = 1 AND b > 2").unwrap();
//! assert_eq!(stmt.to_string(), "select a, b from t where ((a = 1) and (b > 2))");
//! ```
//!
//! ## Editing a SELECT
//!
//! ```rust
//! use gda_sql_core::ast::{CompareOp, LogicOp};
//! use gda_sql_core::{append_tablejoin, append_where, get_tables, parse_with_error};
//!
//! let mut stmt = parse_with_error("SELECT * FROM orders").unwrap();
//! append_tablejoin(&mut stmt, "orders", "customers", "customer_id", "id").unwrap();
//! append_where(&mut stmt, "customers.country", Some("'FR'"), LogicOp::And, CompareOp::Eq)
//!     .unwrap();
//!
//! assert_eq!(get_tables(&stmt).unwrap(), ["orders", "customers"]);
//! assert_eq!(
//!     stmt.to_string(),
//!     "select * from orders, customers where \
//!      ((orders.customer_id = customers.id) and (customers.country = 'FR'))"
//! );
//! ```

pub mod analysis;
pub mod ast;
pub mod builder;
pub mod destroy;
pub mod dump;
pub mod error;
pub mod lexer;
pub mod parser;

pub use analysis::{
    WhereJoin, append_field, append_tablejoin, append_where, get_fields, get_first_table,
    get_tables, get_wherejoin, get_wherejoin_ontable, search_where,
};
pub use ast::Statement;
pub use destroy::{destroy, free_wherejoin};
pub use dump::{Node, display, dump};
pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser, parse, parse_with_error};
