use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::domain::error::CaptureError;
use crate::usecase::ports::capture::EmailCapture;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Email saved successfully";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub struct CaptureService {
    capture: Arc<dyn EmailCapture>,
    token: String,
}

impl CaptureService {
    pub fn new(capture: Arc<dyn EmailCapture>, token: impl Into<String>) -> Self {
        Self {
            capture,
            token: token.into(),
        }
    }

    /// Submits `email` to the capture endpoint. On success returns the
    /// endpoint's message; "already registered" counts as success.
    pub async fn submit(&self, email: &str) -> Result<String, CaptureError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(CaptureError::InvalidEmail);
        }

        match self.capture.submit(email, &self.token).await {
            Ok(reply) if reply.accepted => {
                info!("email captured");
                Ok(reply
                    .message
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()))
            }
            Ok(reply) => {
                warn!(message = ?reply.message, "email capture rejected");
                Err(CaptureError::Rejected(reply.message))
            }
            Err(err) => {
                warn!(error = %err, "email capture request failed");
                Err(err)
            }
        }
    }
}
