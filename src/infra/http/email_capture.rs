use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::error::CaptureError;
use crate::usecase::ports::capture::{CaptureReply, EmailCapture};

pub const SAVE_EMAIL_ACTION: &str = "pfct_save_email";

/// Body of a WordPress `wp_send_json_success` / `wp_send_json_error` reply.
#[derive(Debug, Deserialize)]
struct AjaxReply {
    success: bool,
    #[serde(default)]
    data: serde_json::Value,
}

pub fn parse_reply(body: &str) -> Result<CaptureReply> {
    let reply: AjaxReply =
        serde_json::from_str(body).context("email capture reply is not valid json")?;
    let message = match &reply.data {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Object(map) => map
            .get("message")
            .and_then(|value| value.as_str())
            .map(str::to_string),
        _ => None,
    };
    Ok(CaptureReply {
        accepted: reply.success,
        message,
    })
}

/// Posts the gate form to an `admin-ajax.php` style endpoint.
pub struct AjaxEmailCapture {
    client: reqwest::Client,
    ajax_url: String,
}

impl AjaxEmailCapture {
    pub fn new(ajax_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build http client")?;
        Ok(Self {
            client,
            ajax_url: ajax_url.into(),
        })
    }

    async fn post(&self, email: &str, token: &str) -> Result<CaptureReply> {
        let body = self
            .client
            .post(&self.ajax_url)
            .form(&[
                ("action", SAVE_EMAIL_ACTION),
                ("email", email),
                ("nonce", token),
            ])
            .send()
            .await
            .with_context(|| format!("failed to post email form: {}", self.ajax_url))?
            .text()
            .await
            .context("failed to read email capture reply")?;
        parse_reply(&body)
    }
}

#[async_trait]
impl EmailCapture for AjaxEmailCapture {
    async fn submit(&self, email: &str, token: &str) -> Result<CaptureReply, CaptureError> {
        self.post(email, token)
            .await
            .map_err(|err| CaptureError::Network(format!("{err:#}")))
    }
}
