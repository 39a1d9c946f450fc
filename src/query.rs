//! Fixed analytical queries against the loaded table
//!
//! The report is a small enumerated set of named read-only operations
//! rather than loose SQL strings scattered through control flow. Statements
//! are fixed literals owned by the pipeline (the table name is operator
//! configuration, not external input), so there is no parameterization of
//! values.

use crate::error::{EtlError, Result};
use crate::journal::Journal;
use clap::ValueEnum;
use owo_colors::OwoColorize;
use rusqlite::types::Value;
use rusqlite::Connection;

/// The named read-only operations the batch report runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryOp {
    /// Every row of the loaded table
    AllRows,
    /// Average market cap in USD billions
    AverageUsdCap,
    /// Names of the first five banks
    TopFiveNames,
}

impl QueryOp {
    /// The full batch report, in execution order.
    pub const REPORT: [QueryOp; 3] = [
        QueryOp::AllRows,
        QueryOp::AverageUsdCap,
        QueryOp::TopFiveNames,
    ];

    /// Render the operation as SQL against the given table.
    pub fn sql(&self, table: &str) -> String {
        match self {
            QueryOp::AllRows => format!("SELECT * FROM {}", table),
            QueryOp::AverageUsdCap => format!("SELECT AVG(MC_USD_Billion) FROM {}", table),
            QueryOp::TopFiveNames => format!("SELECT Name FROM {} LIMIT 5", table),
        }
    }
}

/// Execute one read-only statement, printing each row as it is produced and
/// journaling the statement text.
///
/// Rows come back in the store's natural result order.
///
/// # Errors
/// `Query` on malformed SQL or a missing table.
pub fn run_query(conn: &Connection, sql: &str, journal: &dyn Journal) -> Result<Vec<Vec<Value>>> {
    let query_err = |source: rusqlite::Error| EtlError::Query {
        sql: sql.to_string(),
        source,
    };

    println!("{} {}", "Query:".bright_white(), sql.cyan());
    let mut stmt = conn.prepare(sql).map_err(query_err)?;
    let column_count = stmt.column_count();

    let mut rows_out = Vec::new();
    let mut rows = stmt.query([]).map_err(query_err)?;
    while let Some(row) = rows.next().map_err(query_err)? {
        let mut tuple = Vec::with_capacity(column_count);
        for i in 0..column_count {
            tuple.push(row.get::<_, Value>(i).map_err(query_err)?);
        }
        println!("{}", format_row(&tuple));
        rows_out.push(tuple);
    }

    journal.record(&format!("Executed query: {}", sql))?;
    Ok(rows_out)
}

fn format_row(row: &[Value]) -> String {
    let fields: Vec<String> = row
        .iter()
        .map(|value| match value {
            Value::Null => "NULL".to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(bytes) => format!("<{} byte blob>", bytes.len()),
        })
        .collect();
    fields.join(", ")
}
