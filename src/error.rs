//! Pipeline error kinds
//!
//! Every stage surfaces a typed `EtlError`; nothing downstream catches or
//! recovers from an upstream failure, so each variant propagates to the
//! process boundary and aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    /// The HTTP GET for the source document failed (transport error or
    /// non-success status).
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The fetched markup contains no element identifiable as the target
    /// data table.
    #[error("parse failure: {0}")]
    Parse(String),

    /// A market-cap cell was not numeric after stripping whitespace.
    #[error("could not coerce cell value {0:?} to a number")]
    Coercion(String),

    /// The exchange-rate table lacks one of the required currencies.
    #[error("exchange rate table is missing required currency {0}")]
    MissingRate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Database write failure (table creation or insert).
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// A read-only query failed (malformed SQL or missing table).
    #[error("query {sql:?} failed: {source}")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, EtlError>;
