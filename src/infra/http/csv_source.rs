use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::error::LoadError;
use crate::usecase::ports::source::CsvSource;

pub struct HttpCsvSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCsvSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to request csv: {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Failed to fetch CSV: {}", status.as_u16())
        }

        response
            .text()
            .await
            .context("failed to read csv response body")
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch_text(&self) -> Result<String, LoadError> {
        self.fetch()
            .await
            .map_err(|err| LoadError::DataSource(format!("{err:#}")))
    }
}
