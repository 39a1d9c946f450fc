//! Core ETL (Extract, Transform, Load) abstractions
//!
//! Trait seams for the pipeline stages. Everything here is synchronous:
//! the job is a one-shot batch run where each stage's output is the next
//! stage's required input, so there is nothing to overlap.

mod extract;
mod load;
mod pipeline;
mod transform;

pub use extract::{parse_bank_table, MarketCapExtractor};
pub use load::{CsvLoader, SqliteLoader};
pub use pipeline::Pipeline;
pub use transform::CurrencyConverter;

use crate::error::Result;

/// Extractor trait for extracting records from a source
///
/// Implementors define how to pull items out of sources like web pages,
/// files, or databases.
pub trait Extractor {
    /// The type of items extracted
    type Item;

    /// Extract items from the source, in source order.
    ///
    /// # Errors
    /// Returns an error if extraction fails (network, I/O, parsing, etc.)
    fn extract(&self) -> Result<Vec<Self::Item>>;
}

/// Transformer trait for transforming records
///
/// Implementors define how to turn one item into another: cleaning,
/// enrichment, format conversion, validation.
pub trait Transformer {
    /// Input item type
    type Input;

    /// Output item type after transformation
    type Output;

    /// Transform a single item
    ///
    /// # Errors
    /// Returns an error if transformation fails (validation, conversion, etc.)
    fn transform(&self, input: Self::Input) -> Result<Self::Output>;

    /// Transform multiple items, preserving order
    fn transform_many(&self, inputs: Vec<Self::Input>) -> Result<Vec<Self::Output>> {
        inputs.into_iter().map(|i| self.transform(i)).collect()
    }
}

/// Loader trait for loading records to a destination
///
/// Implementors define how to persist a dataset to destinations like files
/// or database tables.
pub trait Loader {
    /// The type of items to load
    type Item;

    /// Load items to the destination, preserving dataset order.
    ///
    /// Returns the number of items loaded.
    ///
    /// # Errors
    /// Returns an error if loading fails (I/O, storage, etc.)
    fn load(&self, items: &[Self::Item]) -> Result<usize>;

    /// Human-readable destination description, used in journal messages.
    fn describe(&self) -> String;
}
