use async_trait::async_trait;

use crate::domain::error::CaptureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureReply {
    pub accepted: bool,
    pub message: Option<String>,
}

/// Server side of the email gate. Persistence is the endpoint's business.
#[async_trait]
pub trait EmailCapture: Send + Sync {
    /// `Err` only for transport problems; a refusal is `accepted: false`.
    async fn submit(&self, email: &str, token: &str) -> Result<CaptureReply, CaptureError>;
}
