//! Static exchange-rate table
//!
//! Parsed once from a two-column CSV (`Currency,Rate`) before the transform
//! stage runs, then read-only for the lifetime of the run. Currencies other
//! than GBP/EUR/INR are ignored; a missing required currency is an error
//! raised before any record is transformed or any output written.

use crate::error::{EtlError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Currency")]
    currency: String,

    #[serde(rename = "Rate")]
    rate: f64,
}

/// Multipliers relative to USD for the three target currencies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    pub gbp: f64,
    pub eur: f64,
    pub inr: f64,
}

impl RateTable {
    /// Read the rate table from a CSV file.
    ///
    /// # Errors
    /// `Io`/`Csv` if the file cannot be read or parsed, `MissingRate` if any
    /// of GBP, EUR, or INR is absent.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut rates = HashMap::new();
        for row in reader.deserialize() {
            let row: RateRow = row?;
            rates.insert(row.currency, row.rate);
        }
        Self::from_map(&rates)
    }

    /// Validate a currency→rate mapping into a typed table.
    pub fn from_map(rates: &HashMap<String, f64>) -> Result<Self> {
        let require = |code: &str| {
            rates
                .get(code)
                .copied()
                .ok_or_else(|| EtlError::MissingRate(code.to_string()))
        };
        Ok(Self {
            gbp: require("GBP")?,
            eur: require("EUR")?,
            inr: require("INR")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn complete_table_parses() {
        let rates =
            RateTable::from_map(&map(&[("GBP", 0.8), ("EUR", 0.93), ("INR", 82.5)])).unwrap();
        assert_eq!(rates.gbp, 0.8);
        assert_eq!(rates.eur, 0.93);
        assert_eq!(rates.inr, 82.5);
    }

    #[test]
    fn extra_currencies_are_ignored() {
        let rates = RateTable::from_map(&map(&[
            ("GBP", 0.8),
            ("EUR", 0.93),
            ("INR", 82.5),
            ("JPY", 146.2),
        ]))
        .unwrap();
        assert_eq!(rates.inr, 82.5);
    }

    #[test]
    fn missing_currency_is_an_error() {
        let result = RateTable::from_map(&map(&[("GBP", 0.8), ("EUR", 0.93)]));
        assert!(matches!(result, Err(EtlError::MissingRate(code)) if code == "INR"));
    }
}
