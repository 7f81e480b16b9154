use async_trait::async_trait;

use crate::domain::error::LoadError;

/// Where the offer CSV comes from.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// Body of the CSV resource. Transport failures and non-2xx answers are
    /// `LoadError::DataSource`.
    async fn fetch_text(&self) -> Result<String, LoadError>;
}
