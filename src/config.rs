use std::time::Duration;

use anyhow::{Context, Result};

use crate::usecase::services::debounce::DEFAULT_DEBOUNCE;
use crate::usecase::services::table_engine::DEFAULT_PAGE_SIZE;

pub const DEFAULT_CSV_URL: &str =
    "https://raw.githubusercontent.com/JustinLuft/propdatascraper/main/plans_output.csv";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_CSV_URL: &str = "PFCT_CSV_URL";
pub const ENV_PAGE_SIZE: &str = "PFCT_PAGE_SIZE";
pub const ENV_AJAX_URL: &str = "PFCT_AJAX_URL";
pub const ENV_NONCE: &str = "PFCT_NONCE";
pub const ENV_DEBOUNCE_MS: &str = "PFCT_DEBOUNCE_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PFCT_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub csv_url: String,
    pub page_size: usize,
    /// Email gate endpoint. The table is shown without a gate when unset.
    pub ajax_url: Option<String>,
    pub nonce: String,
    pub debounce: Duration,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_CSV_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            ajax_url: None,
            nonce: String::new(),
            debounce: DEFAULT_DEBOUNCE,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(url) = read(ENV_CSV_URL) {
            config.csv_url = url;
        }
        if let Some(value) = read(ENV_PAGE_SIZE) {
            config.page_size = parse_positive(ENV_PAGE_SIZE, &value)? as usize;
        }
        config.ajax_url = read(ENV_AJAX_URL);
        if let Some(nonce) = read(ENV_NONCE) {
            config.nonce = nonce;
        }
        if let Some(value) = read(ENV_DEBOUNCE_MS) {
            config.debounce = Duration::from_millis(parse_positive(ENV_DEBOUNCE_MS, &value)?);
        }
        if let Some(value) = read(ENV_HTTP_TIMEOUT_SECS) {
            config.http_timeout =
                Duration::from_secs(parse_positive(ENV_HTTP_TIMEOUT_SECS, &value)?);
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    let parsed = value
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number, got {value:?}"))?;
    if parsed == 0 {
        anyhow::bail!("{key} must be greater than zero")
    }
    Ok(parsed)
}
