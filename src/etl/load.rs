//! Loading the enriched dataset to its destinations
//!
//! Two independent loaders run in sequence: a flat CSV file and a SQLite
//! table. Neither rolls the other back; a failure in one aborts the run and
//! leaves whatever was already written in place.

use super::Loader;
use crate::error::{EtlError, Result};
use crate::records::{EnrichedBankRecord, COLUMNS};
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Writes the dataset as comma-separated values with a header row.
///
/// The header is written explicitly so an empty dataset still produces a
/// header-only file. Any existing file at the target path is overwritten.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Loader for CsvLoader {
    type Item = EnrichedBankRecord;

    fn load(&self, items: &[Self::Item]) -> Result<usize> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(COLUMNS)?;
        for record in items {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(items.len())
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Replaces a SQLite table with the dataset.
///
/// Drop-and-recreate semantics: loading the same dataset twice leaves the
/// table with exactly one copy. Inserts preserve dataset order.
pub struct SqliteLoader<'conn> {
    conn: &'conn Connection,
    table: String,
}

impl<'conn> SqliteLoader<'conn> {
    pub fn new(conn: &'conn Connection, table: impl Into<String>) -> Self {
        Self {
            conn,
            table: table.into(),
        }
    }
}

impl Loader for SqliteLoader<'_> {
    type Item = EnrichedBankRecord;

    fn load(&self, items: &[Self::Item]) -> Result<usize> {
        self.conn
            .execute_batch(&format!(
                "DROP TABLE IF EXISTS {table};
                 CREATE TABLE {table} (
                     {name} TEXT,
                     {usd} REAL,
                     {gbp} REAL,
                     {eur} REAL,
                     {inr} REAL
                 );",
                table = self.table,
                name = COLUMNS[0],
                usd = COLUMNS[1],
                gbp = COLUMNS[2],
                eur = COLUMNS[3],
                inr = COLUMNS[4],
            ))
            .map_err(EtlError::Storage)?;

        let mut stmt = self.conn.prepare(&format!(
            "INSERT INTO {} VALUES (?1, ?2, ?3, ?4, ?5)",
            self.table
        ))?;
        for record in items {
            stmt.execute(params![
                record.name,
                record.market_cap_usd,
                record.market_cap_gbp,
                record.market_cap_eur,
                record.market_cap_inr,
            ])?;
        }
        Ok(items.len())
    }

    fn describe(&self) -> String {
        format!("database table {}", self.table)
    }
}
