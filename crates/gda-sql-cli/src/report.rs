//! Output formatting: plain text by default, JSON with `--json`.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use gda_sql_core::{Statement, WhereJoin};

/// A statement rendered back to SQL.
#[derive(Debug, Serialize)]
pub struct StatementReport {
    pub kind: &'static str,
    pub sql: String,
}

impl From<&Statement> for StatementReport {
    fn from(statement: &Statement) -> Self {
        Self {
            kind: statement.kind().as_str(),
            sql: statement.to_string(),
        }
    }
}

impl fmt::Display for StatementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// An owned copy of a [`WhereJoin`], detached from the tree.
#[derive(Debug, Serialize)]
pub struct WhereJoinReport {
    pub left: String,
    pub op: &'static str,
    pub right: String,
    pub is_join: bool,
    pub left_constant: bool,
    pub right_constant: bool,
}

impl From<&WhereJoin<'_>> for WhereJoinReport {
    fn from(join: &WhereJoin<'_>) -> Self {
        Self {
            left: join.left.join("."),
            op: join.op.as_str(),
            right: join.right.join("."),
            is_join: join.is_join,
            left_constant: join.left_constant,
            right_constant: join.right_constant,
        }
    }
}

impl fmt::Display for WhereJoinReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)?;
        if self.left_constant {
            f.write_str(" [left constant]")?;
        }
        if self.right_constant {
            f.write_str(" [right constant]")?;
        }
        Ok(())
    }
}

pub fn render_one<T: Serialize + fmt::Display>(json: bool, value: &T) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(value)
    } else {
        Ok(value.to_string())
    }
}

pub fn render_all<T: Serialize + fmt::Display>(
    json: bool,
    values: &[T],
) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(values)
    } else {
        Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn print(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if text.is_empty() {
        return out.flush();
    }
    writeln!(out, "{text}")
}

pub fn emit<T: Serialize + fmt::Display>(json: bool, value: &T) -> anyhow::Result<()> {
    print(&render_one(json, value)?)?;
    Ok(())
}

pub fn emit_all<T: Serialize + fmt::Display>(json: bool, values: &[T]) -> anyhow::Result<()> {
    print(&render_all(json, values)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gda_sql_core::{get_wherejoin, parse_with_error};

    #[test]
    fn test_statement_report() {
        let stmt = parse_with_error("SELECT a FROM t").unwrap();
        let report = StatementReport::from(&stmt);
        assert_eq!(render_one(false, &report).unwrap(), "select a from t");
        let json: serde_json::Value =
            serde_json::from_str(&render_one(true, &report).unwrap()).unwrap();
        assert_eq!(json["kind"], "select");
        assert_eq!(json["sql"], "select a from t");
    }

    #[test]
    fn test_wherejoin_report() {
        let stmt = parse_with_error("SELECT * FROM a, b WHERE a.id = b.id AND a.n > 3").unwrap();
        let reports: Vec<WhereJoinReport> = get_wherejoin(&stmt)
            .unwrap()
            .iter()
            .map(WhereJoinReport::from)
            .collect();
        assert_eq!(
            render_all(false, &reports).unwrap(),
            "a.id = b.id\na.n > 3 [right constant]"
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_all(true, &reports).unwrap()).unwrap();
        assert_eq!(json[1]["right_constant"], true);
        assert_eq!(json[0]["left"], "a.id");
    }

    #[test]
    fn test_string_lists() {
        let tables = vec!["t".to_string(), "u".to_string()];
        assert_eq!(render_all(false, &tables).unwrap(), "t\nu");
        assert_eq!(render_all(true, &tables).unwrap(), "[\n  \"t\",\n  \"u\"\n]");
        assert_eq!(render_all::<String>(false, &[]).unwrap(), "");
    }
}
