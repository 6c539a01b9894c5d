//! Indented debug dump of a statement tree.
//!
//! [`Node`] is a borrowed view over any tree node. Its children are listed
//! in the order the SQL renderer visits them, with clause-level groups
//! under a titled [`Node::Section`].

use std::fmt::Write as _;
use std::io;

use crate::ast::{
    Condition, Field, FieldItem, OrderField, ParamSpec, SelectStatement, Statement, StatementBody,
    Table, TableKind, Where,
};

/// A borrowed view of one node in a statement tree.
#[derive(Debug, Clone)]
pub enum Node<'a> {
    /// The statement root.
    Statement(&'a Statement),
    /// A SELECT body, top level or nested.
    Select(&'a SelectStatement),
    /// A titled group of children, such as a clause.
    Section {
        /// Group title.
        title: &'static str,
        /// Group members.
        nodes: Vec<Node<'a>>,
    },
    /// A field.
    Field(&'a Field),
    /// A field item.
    Item(&'a FieldItem),
    /// A parameter annotation.
    Param(&'a ParamSpec),
    /// A table reference.
    Table(&'a Table),
    /// A predicate.
    Condition(&'a Condition),
    /// A WHERE tree node.
    Where(&'a Where),
    /// An ORDER BY entry.
    Order(&'a OrderField),
}

fn section<'a>(title: &'static str, nodes: Vec<Node<'a>>) -> Node<'a> {
    Node::Section { title, nodes }
}

fn fields(items: &[Field]) -> Vec<Node<'_>> {
    items.iter().map(Node::Field).collect()
}

fn where_section(clause: Option<&Where>) -> Option<Node<'_>> {
    clause.map(|tree| section("where", vec![Node::Where(tree)]))
}

fn select_children(select: &SelectStatement) -> Vec<Node<'_>> {
    let mut nodes = vec![section("fields", fields(&select.fields))];
    if !select.from.is_empty() {
        nodes.push(section("from", select.from.iter().map(Node::Table).collect()));
    }
    nodes.extend(where_section(select.where_clause.as_ref()));
    if !select.order.is_empty() {
        nodes.push(section("order by", select.order.iter().map(Node::Order).collect()));
    }
    if !select.group.is_empty() {
        nodes.push(section("group by", fields(&select.group)));
    }
    nodes
}

impl Node<'_> {
    /// One-line description of this node, without its children.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Statement(stmt) => format!("statement {}", stmt.kind()),
            Self::Select(select) if select.distinct => "select distinct".to_string(),
            Self::Select(_) => "select".to_string(),
            Self::Section { title, .. } => (*title).to_string(),
            Self::Field(field) => field.alias.as_ref().map_or_else(
                || "field".to_string(),
                |alias| format!("field as {alias}"),
            ),
            Self::Item(item) => match item {
                FieldItem::Name(path) => format!("name {}", path.join(".")),
                FieldItem::Equation { op, .. } => format!("equation {}", op.as_str()),
                FieldItem::InlineSelect(_) => "inline select".to_string(),
                FieldItem::Function { name, .. } if name.is_empty() => "list".to_string(),
                FieldItem::Function { name, .. } => format!("function {name}"),
            },
            Self::Param(spec) => format!("param {} = {}", spec.kind.as_str(), spec.content),
            Self::Table(table) => table_label(table),
            Self::Condition(cond) => {
                let mut label = format!("condition {}", cond.op().as_str());
                if cond.is_negated() {
                    label.push_str(" negated");
                }
                label
            }
            Self::Where(tree) => match tree {
                Where::Single(_) => "single".to_string(),
                Where::Negated(_) => "not".to_string(),
                Where::Pair { logic, .. } => logic.as_str().to_string(),
            },
            Self::Order(order) => format!("{} {}", order.name.join("."), order.direction.as_str()),
        }
    }

    /// The direct children of this node.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match self {
            Self::Statement(stmt) => match &stmt.body {
                StatementBody::Select(select) => vec![Node::Select(select)],
                StatementBody::Insert(insert) => {
                    let mut nodes = vec![section("table", vec![Node::Table(&insert.table)])];
                    if !insert.fields.is_empty() {
                        nodes.push(section("fields", fields(&insert.fields)));
                    }
                    nodes.push(section("values", fields(&insert.values)));
                    nodes
                }
                StatementBody::Update(update) => {
                    let mut nodes = vec![
                        section("table", vec![Node::Table(&update.table)]),
                        section("set", update.set.iter().map(Node::Condition).collect()),
                    ];
                    nodes.extend(where_section(update.where_clause.as_ref()));
                    nodes
                }
                StatementBody::Delete(delete) => {
                    let mut nodes = vec![section("table", vec![Node::Table(&delete.table)])];
                    nodes.extend(where_section(delete.where_clause.as_ref()));
                    nodes
                }
            },
            Self::Select(select) => select_children(select),
            Self::Section { nodes, .. } => nodes.clone(),
            Self::Field(field) => {
                let mut nodes = vec![Node::Item(&field.item)];
                nodes.extend(field.param_spec.iter().map(Node::Param));
                nodes
            }
            Self::Item(item) => match item {
                FieldItem::Name(_) => vec![],
                FieldItem::Equation { left, right, .. } => vec![Node::Item(left), Node::Item(right)],
                FieldItem::InlineSelect(select) => vec![Node::Select(select)],
                FieldItem::Function { args, .. } => fields(args),
            },
            Self::Table(table) => {
                let mut nodes = match &table.kind {
                    TableKind::Simple(_) => vec![],
                    TableKind::Join { left, right, cond } => {
                        let mut nodes = vec![Node::Table(left), Node::Table(right)];
                        nodes.extend(cond.iter().map(Node::Condition));
                        nodes
                    }
                    TableKind::NestedSelect(select) => vec![Node::Select(select)],
                    TableKind::Function { args, .. } => fields(args),
                };
                nodes.extend(table.join_cond.as_ref().map(|on| section("on", vec![Node::Where(on)])));
                nodes
            }
            Self::Condition(cond) => match cond {
                Condition::Compare { left, right, .. } => vec![Node::Field(left), Node::Field(right)],
                Condition::Between {
                    field,
                    lower,
                    upper,
                    ..
                } => vec![Node::Field(field), Node::Field(lower), Node::Field(upper)],
            },
            Self::Where(tree) => match tree {
                Where::Single(cond) => vec![Node::Condition(cond)],
                Where::Negated(inner) => vec![Node::Where(inner)],
                Where::Pair { left, right, .. } => vec![Node::Where(left), Node::Where(right)],
            },
            Self::Param(_) | Self::Order(_) => vec![],
        }
    }
}

fn table_label(table: &Table) -> String {
    let mut label = match &table.kind {
        TableKind::Simple(name) => format!("table {name}"),
        TableKind::Join { .. } => "join".to_string(),
        TableKind::NestedSelect(_) => "nested select".to_string(),
        TableKind::Function { name, .. } => format!("function {name}"),
    };
    if let Some(alias) = &table.alias {
        let _ = write!(label, " as {alias}");
    }
    let prefix = table.join_type.prefix().trim();
    if !prefix.is_empty() {
        let _ = write!(label, " [{prefix}]");
    }
    label
}

fn write_node(out: &mut String, node: &Node<'_>, depth: usize) {
    let _ = writeln!(out, "{:indent$}{}", "", node.label(), indent = depth * 2);
    for child in node.children() {
        write_node(out, &child, depth + 1);
    }
}

/// Renders the tree under `statement`, one node per line, indented two
/// spaces per level.
#[must_use]
pub fn dump(statement: &Statement) -> String {
    let mut out = String::new();
    write_node(&mut out, &Node::Statement(statement), 0);
    out
}

/// Writes [`dump`] output to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn display<W: io::Write>(statement: &Statement, mut out: W) -> io::Result<()> {
    out.write_all(dump(statement).as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_with_error;

    #[test]
    fn test_dump_select() {
        let stmt = parse_with_error("SELECT a AS x FROM t WHERE a = 1").unwrap();
        let expected = "\
statement select
  select
    fields
      field as x
        name a
    from
      table t
    where
      single
        condition =
          field
            name a
          field
            name 1
";
        assert_eq!(dump(&stmt), expected);
    }

    #[test]
    fn test_dump_update() {
        let stmt = parse_with_error("UPDATE t SET a = 1").unwrap();
        let out = dump(&stmt);
        let lines: Vec<&str> = out.lines().map(str::trim).collect();
        assert_eq!(lines[..5], ["statement update", "table", "table t", "set", "condition ="]);
    }

    #[test]
    fn test_children_follow_render_order() {
        let stmt = parse_with_error("SELECT * FROM a LEFT JOIN b ON a.id = b.id").unwrap();
        let select = stmt.as_select().unwrap();
        let joined = Node::Table(&select.from[1]);
        assert_eq!(joined.label(), "table b [left join]");
        let titles: Vec<String> = joined.children().iter().map(Node::label).collect();
        assert_eq!(titles, ["on"]);
    }

    #[test]
    fn test_display_writes_dump() {
        let stmt = parse_with_error("DELETE FROM t").unwrap();
        let mut buf = Vec::new();
        display(&stmt, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), dump(&stmt));
    }
}
