pub const GENERIC_CAPTURE_FAILURE: &str = "Failed to save email. Please try again.";
pub const CONNECTIVITY_FAILURE: &str =
    "An error occurred. Please check your connection and try again.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Terminal failure of one load attempt. Nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    DataSource(String),
    EmptyDataset,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::DataSource(message) => {
                write!(f, "Unable to load data from CSV file: {message}")
            }
            LoadError::EmptyDataset => write!(f, "No data found in CSV file"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    InvalidEmail,
    /// The endpoint answered and said no; carries its message when it sent one.
    Rejected(Option<String>),
    Network(String),
}

impl CaptureError {
    pub fn user_message(&self) -> String {
        match self {
            CaptureError::InvalidEmail => INVALID_EMAIL.to_string(),
            CaptureError::Rejected(Some(message)) if !message.trim().is_empty() => {
                message.clone()
            }
            CaptureError::Rejected(_) => GENERIC_CAPTURE_FAILURE.to_string(),
            CaptureError::Network(_) => CONNECTIVITY_FAILURE.to_string(),
        }
    }
}

impl std::fmt::Display for CaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureError::Network(detail) => write!(f, "{}: {detail}", CONNECTIVITY_FAILURE),
            other => write!(f, "{}", other.user_message()),
        }
    }
}

impl std::error::Error for CaptureError {}
