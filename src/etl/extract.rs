//! Extraction of bank records from the source page
//!
//! One blocking GET against an archived snapshot, then a scrape of the
//! first `wikitable`-classed table in the returned markup. Fetching and
//! parsing are split so the parse path is testable without a network.

use super::Extractor;
use crate::error::{EtlError, Result};
use crate::records::BankRecord;
use scraper::{Html, Selector};
use url::Url;

/// Marker class identifying the target data table in the markup.
const TABLE_SELECTOR: &str = "table.wikitable";

/// Extracts (name, market cap) pairs from the largest-banks table of a
/// remote HTML document.
pub struct MarketCapExtractor {
    url: Url,
}

impl MarketCapExtractor {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    fn fetch(&self) -> Result<String> {
        let fetch_err = |source: reqwest::Error| EtlError::Fetch {
            url: self.url.to_string(),
            source,
        };
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("bankcap-etl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(fetch_err)?;
        let response = client
            .get(self.url.clone())
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(fetch_err)?;
        response.text().map_err(fetch_err)
    }
}

impl Extractor for MarketCapExtractor {
    type Item = BankRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        log::debug!("Fetching {}", self.url);
        let body = self.fetch()?;
        log::debug!("Fetched {} bytes, parsing table", body.len());
        parse_bank_table(&body)
    }
}

/// Parse the first `table.wikitable` in `html` into bank records.
///
/// The header row is skipped; for every remaining row the second cell is
/// the bank name and the third is the market cap in USD billions. Records
/// come back in document order with no sorting or dedup.
///
/// # Errors
/// `Parse` when no marker table exists, `Coercion` when a market-cap cell
/// is not numeric after stripping whitespace.
pub fn parse_bank_table(html: &str) -> Result<Vec<BankRecord>> {
    let table_selector = Selector::parse(TABLE_SELECTOR).expect("static selector");
    let row_selector = Selector::parse("tr").expect("static selector");
    let cell_selector = Selector::parse("td").expect("static selector");

    let document = Html::parse_document(html);
    let table = document.select(&table_selector).next().ok_or_else(|| {
        EtlError::Parse(format!("no {} element found in document", TABLE_SELECTOR))
    })?;

    let mut records = Vec::new();
    for row in table.select(&row_selector).skip(1) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        // Header and separator rows carry no <td> cells
        if cells.len() < 3 {
            continue;
        }
        let name = cell_text(&cells[1]);
        let market_cap = coerce_market_cap(&cell_text(&cells[2]))?;
        records.push(BankRecord::new(name, market_cap));
    }
    Ok(records)
}

fn cell_text(cell: &scraper::ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn coerce_market_cap(raw: &str) -> Result<f64> {
    let cleaned = raw.replace('\n', "");
    let cleaned = cleaned.trim();
    cleaned
        .parse::<f64>()
        .map_err(|_| EtlError::Coercion(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <table class="wikitable">
          <tr><th>Rank</th><th>Bank name</th><th>Market cap (US$ billion)</th></tr>
          <tr><td>1</td><td>JPMorgan Chase</td><td>432.92
</td></tr>
          <tr><td>2</td><td>Bank of America</td><td>231.52
</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn parses_rows_in_document_order() {
        let records = parse_bank_table(FIXTURE).unwrap();
        assert_eq!(
            records,
            vec![
                BankRecord::new("JPMorgan Chase", 432.92),
                BankRecord::new("Bank of America", 231.52),
            ]
        );
    }

    #[test]
    fn missing_table_is_a_parse_error() {
        let html = "<html><body><p>no tables here</p></body></html>";
        assert!(matches!(parse_bank_table(html), Err(EtlError::Parse(_))));
    }

    #[test]
    fn table_without_marker_class_is_a_parse_error() {
        let html = "<table><tr><td>1</td><td>Bank</td><td>10.0</td></tr></table>";
        assert!(matches!(parse_bank_table(html), Err(EtlError::Parse(_))));
    }

    #[test]
    fn non_numeric_cell_is_a_coercion_error() {
        let html = r#"
            <table class="wikitable">
              <tr><th>Rank</th><th>Bank</th><th>MC</th></tr>
              <tr><td>1</td><td>Bank A</td><td>n/a</td></tr>
            </table>
        "#;
        assert!(matches!(
            parse_bank_table(html),
            Err(EtlError::Coercion(raw)) if raw == "n/a"
        ));
    }

    #[test]
    fn empty_table_parses_to_empty_dataset() {
        let html = r#"
            <table class="wikitable">
              <tr><th>Rank</th><th>Bank</th><th>MC</th></tr>
            </table>
        "#;
        assert_eq!(parse_bank_table(html).unwrap(), vec![]);
    }
}
