use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::dataset::Dataset;
use crate::domain::error::LoadError;
use crate::infra::import::csv::parse_csv;
use crate::usecase::ports::source::CsvSource;

pub struct LoadService {
    source: Arc<dyn CsvSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn CsvSource>) -> Self {
        Self { source }
    }

    /// Fetches and parses one dataset. A body without a single valid row is
    /// an error, not an empty table.
    pub async fn load(&self) -> Result<Dataset, LoadError> {
        let text = self.source.fetch_text().await.inspect_err(|err| {
            warn!(error = %err, "csv fetch failed");
        })?;

        let dataset = parse_csv(&text);
        if dataset.is_empty() {
            warn!(
                skipped = dataset.skipped_lines(),
                "csv contained no usable rows"
            );
            return Err(LoadError::EmptyDataset);
        }

        info!(
            rows = dataset.len(),
            columns = dataset.header().len(),
            skipped = dataset.skipped_lines(),
            "csv loaded"
        );
        Ok(dataset)
    }
}
