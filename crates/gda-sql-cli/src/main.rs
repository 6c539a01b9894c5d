//! gda-sql CLI
//!
//! Command-line tool for inspecting and rewriting SQL statements.

mod input;
mod report;

use std::io;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use gda_sql_core::ast::{CompareOp, LogicOp};
use gda_sql_core::{
    Statement, append_field, append_tablejoin, append_where, destroy, free_wherejoin,
    get_fields, get_first_table, get_tables, get_wherejoin, get_wherejoin_ontable,
    parse_with_error,
};

use report::{StatementReport, WhereJoinReport};

/// Parse, inspect and rewrite SQL statements.
#[derive(Parser)]
#[command(name = "gda-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArg {
    /// SQL statement; `-` or nothing reads standard input.
    #[arg(env = "GDA_SQL_QUERY")]
    query: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the statement and print it back as SQL.
    Render {
        #[command(flatten)]
        query: QueryArg,
    },

    /// Print the statement tree, indented two spaces per level.
    Dump {
        #[command(flatten)]
        query: QueryArg,
    },

    /// List the select-list fields.
    Fields {
        #[command(flatten)]
        query: QueryArg,
    },

    /// List the FROM entries.
    Tables {
        #[command(flatten)]
        query: QueryArg,
    },

    /// Print the first FROM entry.
    FirstTable {
        #[command(flatten)]
        query: QueryArg,
    },

    /// List the candidate join predicates of the WHERE and ON clauses.
    Wherejoin {
        #[command(flatten)]
        query: QueryArg,

        /// Only the first WHERE predicate mentioning this table.
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Add a field to the select list.
    AppendField {
        #[command(flatten)]
        query: QueryArg,

        /// Field name.
        #[arg(short, long)]
        field: String,

        /// Table qualifying the field.
        #[arg(short, long)]
        table: Option<String>,

        /// Alias for the field.
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Add a table to the FROM list, joined through the WHERE clause.
    AppendJoin {
        #[command(flatten)]
        query: QueryArg,

        /// Table already in the FROM list.
        #[arg(long)]
        left_table: String,

        /// Table to add.
        #[arg(long)]
        right_table: String,

        /// Join column of the left table.
        #[arg(long)]
        left_field: String,

        /// Join column of the right table.
        #[arg(long)]
        right_field: String,
    },

    /// Add a condition to the WHERE clause.
    AppendWhere {
        #[command(flatten)]
        query: QueryArg,

        /// Left operand.
        #[arg(short, long)]
        left: String,

        /// Right operand; without it the condition tests for NULL.
        #[arg(short, long)]
        right: Option<String>,

        /// Connective joining the condition to the existing clause.
        #[arg(long, value_enum, default_value_t = Logic::And)]
        logic: Logic,

        /// Comparison operator.
        #[arg(long, value_enum, default_value_t = Op::Eq)]
        op: Op,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Logic {
    And,
    Or,
}

impl From<Logic> for LogicOp {
    fn from(logic: Logic) -> Self {
        match logic {
            Logic::And => Self::And,
            Logic::Or => Self::Or,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Op {
    Eq,
    Is,
    Not,
    In,
    NotIn,
    Like,
    Gt,
    Lt,
    Geq,
    Leq,
    Diff,
    Regexp,
    RegexpCi,
    NotRegexp,
    NotRegexpCi,
    Similar,
}

impl From<Op> for CompareOp {
    fn from(op: Op) -> Self {
        match op {
            Op::Eq => Self::Eq,
            Op::Is => Self::Is,
            Op::Not => Self::Not,
            Op::In => Self::In,
            Op::NotIn => Self::NotIn,
            Op::Like => Self::Like,
            Op::Gt => Self::Gt,
            Op::Lt => Self::Lt,
            Op::Geq => Self::Geq,
            Op::Leq => Self::Leq,
            Op::Diff => Self::Diff,
            Op::Regexp => Self::Regexp,
            Op::RegexpCi => Self::RegexpCi,
            Op::NotRegexp => Self::NotRegexp,
            Op::NotRegexpCi => Self::NotRegexpCi,
            Op::Similar => Self::Similar,
        }
    }
}

fn load(query: QueryArg) -> anyhow::Result<Statement> {
    let text = input::read_query(query.query)?;
    parse_with_error(&text).with_context(|| format!("cannot parse {:?}", text.trim()))
}

/// Prints an edited statement, then releases it.
fn finish(json: bool, statement: Statement) -> anyhow::Result<()> {
    report::emit(json, &StatementReport::from(&statement))?;
    destroy(statement);
    Ok(())
}

fn run(command: Commands, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Render { query } => finish(json, load(query)?),

        Commands::Dump { query } => {
            let statement = load(query)?;
            gda_sql_core::display(&statement, io::stdout().lock())?;
            Ok(())
        }

        Commands::Fields { query } => report::emit_all(json, &get_fields(&load(query)?)?),

        Commands::Tables { query } => report::emit_all(json, &get_tables(&load(query)?)?),

        Commands::FirstTable { query } => report::emit(json, &get_first_table(&load(query)?)?),

        Commands::Wherejoin { query, table } => {
            let statement = load(query)?;
            let joins = match table.as_deref() {
                Some(table) => get_wherejoin_ontable(&statement, table)?
                    .into_iter()
                    .collect(),
                None => get_wherejoin(&statement)?,
            };
            debug!(count = joins.len(), "collected wherejoin descriptors");
            let reports: Vec<WhereJoinReport> = joins.iter().map(WhereJoinReport::from).collect();
            free_wherejoin(joins);
            report::emit_all(json, &reports)
        }

        Commands::AppendField {
            query,
            field,
            table,
            alias,
        } => {
            let mut statement = load(query)?;
            append_field(&mut statement, table.as_deref(), &field, alias.as_deref())?;
            finish(json, statement)
        }

        Commands::AppendJoin {
            query,
            left_table,
            right_table,
            left_field,
            right_field,
        } => {
            let mut statement = load(query)?;
            append_tablejoin(
                &mut statement,
                &left_table,
                &right_table,
                &left_field,
                &right_field,
            )?;
            finish(json, statement)
        }

        Commands::AppendWhere {
            query,
            left,
            right,
            logic,
            op,
        } => {
            let mut statement = load(query)?;
            append_where(
                &mut statement,
                &left,
                right.as_deref(),
                logic.into(),
                op.into(),
            )?;
            finish(json, statement)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    run(cli.command, cli.json)
}
