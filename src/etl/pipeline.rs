//! Pipeline orchestration for ETL operations

use super::{Extractor, Loader, Transformer};
use crate::error::Result;
use crate::journal::Journal;

/// ETL pipeline running Extract → Transform → Load strictly in sequence.
///
/// Loaders run in the order given; each is an independent side effect, so an
/// earlier loader's output stays in place if a later one fails. Any stage
/// failure aborts the remaining stages. One journal line is recorded per
/// completed stage, so a failed stage never journals its completion.
pub struct Pipeline<'a, E, T>
where
    T: Transformer,
{
    extractor: E,
    transformer: T,
    loaders: Vec<Box<dyn Loader<Item = T::Output> + 'a>>,
}

impl<'a, E, T> Pipeline<'a, E, T>
where
    E: Extractor,
    T: Transformer<Input = E::Item>,
{
    pub fn new(
        extractor: E,
        transformer: T,
        loaders: Vec<Box<dyn Loader<Item = T::Output> + 'a>>,
    ) -> Self {
        Self {
            extractor,
            transformer,
            loaders,
        }
    }

    /// Run the pipeline to completion, returning the enriched dataset.
    ///
    /// # Errors
    /// Returns the first stage error encountered; later stages do not run.
    pub fn run(&self, journal: &dyn Journal) -> Result<Vec<T::Output>> {
        let raw = self.extractor.extract()?;
        log::info!("Extracted {} record(s)", raw.len());
        journal.record("Data extraction complete. Initiating transformation")?;

        let dataset = self.transformer.transform_many(raw)?;
        log::info!("Transformed {} record(s)", dataset.len());
        journal.record("Data transformation complete. Initiating load")?;

        for loader in &self.loaders {
            let count = loader.load(&dataset)?;
            log::info!("Loaded {} record(s) to {}", count, loader.describe());
            journal.record(&format!("Data loaded to {}", loader.describe()))?;
        }

        Ok(dataset)
    }
}
