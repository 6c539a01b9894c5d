//! SQL rendering via `fmt::Display`.
//!
//! Output is lower-case keywords with single spaces. Every WHERE node is
//! wrapped in parentheses where it is rendered, whatever its depth, so
//! nesting never depends on operator precedence. Rendering stabilises
//! after one pass: `parse(s).to_string()` re-parses to a tree that renders
//! identically.

use std::fmt;

use super::{
    Condition, DeleteStatement, Field, FieldItem, FieldOp, InsertStatement, JoinType, OrderField,
    SelectStatement, Statement, StatementBody, Table, TableKind, UpdateStatement, Where,
};

fn comma_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn dotted(f: &mut fmt::Formatter<'_>, path: &[String]) -> fmt::Result {
    for (i, segment) in path.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(segment)?;
    }
    Ok(())
}

/// Writes one side of an equation, parenthesised when the tree shape
/// would otherwise be lost on re-parse.
fn equation_operand(
    f: &mut fmt::Formatter<'_>,
    item: &FieldItem,
    parent: FieldOp,
    right_side: bool,
) -> fmt::Result {
    let wrap = match item {
        FieldItem::Equation { op, .. } => {
            op.precedence() < parent.precedence()
                || (right_side && op.precedence() == parent.precedence())
        }
        // `a--5` would lex as a comment
        FieldItem::Name(path) => {
            right_side && path.first().is_some_and(|s| s.starts_with('-'))
        }
        _ => false,
    };
    if wrap {
        write!(f, "({item})")
    } else {
        write!(f, "{item}")
    }
}

/// Writes a FROM list: cross entries are comma separated, joined entries
/// carry their own keyword prefix.
fn from_list(f: &mut fmt::Formatter<'_>, tables: &[Table]) -> fmt::Result {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 && table.join_type == JoinType::Cross {
            f.write_str(", ")?;
        }
        write!(f, "{table}")?;
    }
    Ok(())
}

impl fmt::Display for FieldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(path) => dotted(f, path),
            Self::Equation { left, right, op } => {
                equation_operand(f, left, *op, false)?;
                f.write_str(op.as_str())?;
                equation_operand(f, right, *op, true)
            }
            Self::InlineSelect(select) => write!(f, "({select})"),
            Self::Function { name, args } => {
                write!(f, "{name}(")?;
                comma_list(f, args)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare {
                left,
                op,
                right,
                negated,
            } => {
                if *negated && op.supports_negation() {
                    write!(f, "{left} {} not {right}", op.as_str())
                } else {
                    if *negated {
                        f.write_str("not ")?;
                    }
                    write!(f, "{left} {} {right}", op.as_str())
                }
            }
            Self::Between {
                field,
                lower,
                upper,
                negated,
            } => {
                if *negated {
                    f.write_str("not ")?;
                }
                write!(f, "{field} between {lower} and {upper}")
            }
        }
    }
}

impl fmt::Display for Where {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        match self {
            Self::Single(cond) => write!(f, "{cond}")?,
            Self::Negated(inner) => write!(f, "not {inner}")?,
            Self::Pair { left, right, logic } => {
                write!(f, "{left} {} {right}", logic.as_str())?;
            }
        }
        f.write_str(")")
    }
}

/// Writes a table without its join prefix.
fn table_body(f: &mut fmt::Formatter<'_>, table: &Table) -> fmt::Result {
    write!(f, "{}", table.kind)?;
    if let Some(alias) = &table.alias {
        write!(f, " as {alias}")?;
    }
    if let Some(on) = &table.join_cond {
        write!(f, " on {on}")?;
    }
    Ok(())
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(name) => f.write_str(name),
            Self::Join { left, right, cond } => {
                // a cross join filtered by a condition is an inner join
                let keyword = match (right.join_type, cond) {
                    (JoinType::Cross, None) => " cross join ",
                    (JoinType::Cross, Some(_)) => " join ",
                    (join_type, _) => join_type.prefix(),
                };
                write!(f, "({left}{keyword}")?;
                table_body(f, right)?;
                if let Some(cond) = cond {
                    write!(f, " on {cond}")?;
                }
                f.write_str(")")
            }
            Self::NestedSelect(select) => write!(f, "({select})"),
            Self::Function { name, args } => {
                write!(f, "{name}(")?;
                comma_list(f, args)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.join_type.prefix())?;
        table_body(f, self)
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dotted(f, &self.name)?;
        if self.direction == super::OrderDirection::Desc {
            f.write_str(" desc")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("select ")?;
        if self.distinct {
            f.write_str("distinct ")?;
        }
        comma_list(f, &self.fields)?;
        if !self.from.is_empty() {
            f.write_str(" from ")?;
            from_list(f, &self.from)?;
        }
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        if !self.order.is_empty() {
            f.write_str(" order by ")?;
            comma_list(f, &self.order)?;
        }
        if !self.group.is_empty() {
            f.write_str(" group by ")?;
            comma_list(f, &self.group)?;
        }
        Ok(())
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert into {}", self.table)?;
        if !self.fields.is_empty() {
            f.write_str(" (")?;
            comma_list(f, &self.fields)?;
            f.write_str(")")?;
        }
        f.write_str(" (")?;
        comma_list(f, &self.values)?;
        f.write_str(")")
    }
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "update {} set ", self.table)?;
        comma_list(f, &self.set)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "delete from {}", self.table)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " where {where_clause}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StatementBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
            Self::Insert(insert) => write!(f, "{insert}"),
            Self::Update(update) => write!(f, "{update}"),
            Self::Delete(delete) => write!(f, "{delete}"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}
