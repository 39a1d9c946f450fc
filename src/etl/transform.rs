//! Currency enrichment of bank records
//!
//! Appends GBP, EUR, and INR market caps to each record by scalar
//! multiplication against the static rate table. Pure over its inputs and
//! order-preserving; each record converts independently.

use super::Transformer;
use crate::error::Result;
use crate::rates::RateTable;
use crate::records::{BankRecord, EnrichedBankRecord};

/// Round to 2 decimal places, half away from zero (half-up for the positive
/// market caps flowing through here). Tie-breaking at exactly .005 is not
/// something callers should depend on given binary floats.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Enriches `BankRecord`s with converted market caps.
pub struct CurrencyConverter {
    rates: RateTable,
}

impl CurrencyConverter {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }
}

impl Transformer for CurrencyConverter {
    type Input = BankRecord;
    type Output = EnrichedBankRecord;

    fn transform(&self, input: Self::Input) -> Result<Self::Output> {
        let usd = input.market_cap_usd;
        Ok(EnrichedBankRecord {
            name: input.name,
            market_cap_usd: usd,
            market_cap_gbp: round2(usd * self.rates.gbp),
            market_cap_eur: round2(usd * self.rates.eur),
            market_cap_inr: round2(usd * self.rates.inr),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> RateTable {
        RateTable {
            gbp: 0.8,
            eur: 0.93,
            inr: 82.5,
        }
    }

    #[test]
    fn converts_and_rounds_each_currency() {
        let converter = CurrencyConverter::new(rates());
        let enriched = converter
            .transform_many(vec![
                BankRecord::new("Bank A", 100.0),
                BankRecord::new("Bank B", 50.0),
            ])
            .unwrap();

        assert_eq!(
            enriched,
            vec![
                EnrichedBankRecord {
                    name: "Bank A".to_string(),
                    market_cap_usd: 100.0,
                    market_cap_gbp: 80.0,
                    market_cap_eur: 93.0,
                    market_cap_inr: 8250.0,
                },
                EnrichedBankRecord {
                    name: "Bank B".to_string(),
                    market_cap_usd: 50.0,
                    market_cap_gbp: 40.0,
                    market_cap_eur: 46.5,
                    market_cap_inr: 4125.0,
                },
            ]
        );
    }

    #[test]
    fn preserves_record_count_and_order() {
        let converter = CurrencyConverter::new(rates());
        let input: Vec<BankRecord> = (0..25)
            .map(|i| BankRecord::new(format!("Bank {}", i), i as f64 + 0.5))
            .collect();
        let output = converter.transform_many(input.clone()).unwrap();

        assert_eq!(output.len(), input.len());
        for (raw, enriched) in input.iter().zip(&output) {
            assert_eq!(enriched.name, raw.name);
            assert_eq!(enriched.market_cap_usd, raw.market_cap_usd);
            assert_eq!(
                enriched.market_cap_gbp,
                (raw.market_cap_usd * 0.8 * 100.0).round() / 100.0
            );
        }
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        let converter = CurrencyConverter::new(RateTable {
            gbp: 0.7423,
            eur: 0.9311,
            inr: 82.137,
        });
        let enriched = converter.transform(BankRecord::new("Bank", 123.45)).unwrap();
        assert_eq!(enriched.market_cap_gbp, 91.64); // 91.636...
        assert_eq!(enriched.market_cap_eur, 114.94); // 114.944...
        assert_eq!(enriched.market_cap_inr, 10139.81); // 10139.813...
    }
}
