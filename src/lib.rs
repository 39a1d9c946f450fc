//! Bank Market-Cap ETL
//!
//! A one-shot batch pipeline that scrapes the largest banks by market
//! capitalization from an archived web page, converts the figures across
//! currencies with a static rate table, persists the result to CSV and
//! SQLite, and runs a fixed analytical report against the loaded table.

pub mod error;
pub mod etl;
pub mod journal;
pub mod query;
pub mod rates;
pub mod records;

// Re-exports for convenience
pub use error::{EtlError, Result};
pub use etl::{
    parse_bank_table, CsvLoader, CurrencyConverter, Extractor, Loader, MarketCapExtractor,
    Pipeline, SqliteLoader, Transformer,
};
pub use journal::{FileJournal, Journal};
pub use query::{run_query, QueryOp};
pub use rates::RateTable;
pub use records::{BankRecord, EnrichedBankRecord};
