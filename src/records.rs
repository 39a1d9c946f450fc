//! Bank market-cap record types
//!
//! `BankRecord` is what the extractor produces, one per parsed table row.
//! `EnrichedBankRecord` supersedes it downstream once the currency
//! conversions have been applied. Serde renames keep the CSV header and the
//! database columns on the same names.

use serde::{Deserialize, Serialize};

/// One row of the source table: bank name and market cap in USD billions.
#[derive(Debug, Clone, PartialEq)]
pub struct BankRecord {
    pub name: String,
    pub market_cap_usd: f64,
}

impl BankRecord {
    pub fn new(name: impl Into<String>, market_cap_usd: f64) -> Self {
        Self {
            name: name.into(),
            market_cap_usd,
        }
    }
}

/// A `BankRecord` plus its market cap converted to GBP, EUR, and INR,
/// each rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBankRecord {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "MC_USD_Billion")]
    pub market_cap_usd: f64,

    #[serde(rename = "MC_GBP_Billion")]
    pub market_cap_gbp: f64,

    #[serde(rename = "MC_EUR_Billion")]
    pub market_cap_eur: f64,

    #[serde(rename = "MC_INR_Billion")]
    pub market_cap_inr: f64,
}

/// Column order shared by the CSV header and the database schema.
pub const COLUMNS: [&str; 5] = [
    "Name",
    "MC_USD_Billion",
    "MC_GBP_Billion",
    "MC_EUR_Billion",
    "MC_INR_Billion",
];
