use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlackyError {
    #[error("Missing Slack credentials: {0}")]
    AuthConfig(String),

    #[error("Channel not found: {0}")]
    NotFound(String),

    #[error("Slack API call {method} failed: {error}")]
    RemoteCall { method: String, error: String },

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to parse Slack response: {0}")]
    Parse(String),

    #[error("Failed to read confirmation: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SlackyError {
    fn from(error: reqwest::Error) -> Self {
        SlackyError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for SlackyError {
    fn from(error: serde_json::Error) -> Self {
        SlackyError::Parse(error.to_string())
    }
}

impl From<std::io::Error> for SlackyError {
    fn from(error: std::io::Error) -> Self {
        SlackyError::Io(error.to_string())
    }
}
