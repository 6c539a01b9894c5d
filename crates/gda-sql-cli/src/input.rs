//! Where the query text comes from.

use std::io::{self, Read};

use anyhow::{Context, bail};
use tracing::debug;

/// Returns the query given on the command line (or through
/// `GDA_SQL_QUERY`), reading standard input when it is absent or `-`.
pub fn read_query(arg: Option<String>) -> anyhow::Result<String> {
    arg.filter(|query| query != "-")
        .map_or_else(|| read_from(io::stdin().lock()), Ok)
}

pub fn read_from(mut reader: impl Read) -> anyhow::Result<String> {
    let mut query = String::new();
    reader
        .read_to_string(&mut query)
        .context("failed to read the query from standard input")?;
    if query.trim().is_empty() {
        bail!("no query given: pass it as an argument, set GDA_SQL_QUERY or pipe it in");
    }
    debug!(bytes = query.len(), "read query from standard input");
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let query = read_query(Some("select 1".to_string())).unwrap();
        assert_eq!(query, "select 1");
    }

    #[test]
    fn test_read_from_reader() {
        let query = read_from(&b"SELECT a FROM t\n"[..]).unwrap();
        assert_eq!(query, "SELECT a FROM t\n");
    }

    #[test]
    fn test_blank_input_is_an_error() {
        let err = read_from(&b"  \n"[..]).unwrap_err();
        assert!(err.to_string().contains("no query given"));
    }
}
