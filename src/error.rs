use reqwest::StatusCode;
use thiserror::Error;

/// Error returned by a [`crate::Transport`] implementation.
///
/// Boxed so that any HTTP stack can surface its own error type verbatim.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to build request URL '{0}'")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to initialise HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] TransportError),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Empty response body from {0}")]
    EmptyBody(String),

    #[error("Failed to decode forecast document")]
    Decode(#[from] serde_json::Error),

    #[error("Forecast request was cancelled")]
    Cancelled,

    #[error("Subscribing requires a running Tokio runtime")]
    MissingRuntime(#[source] tokio::runtime::TryCurrentError),
}

impl ForecastError {
    /// The HTTP status code, if this error was caused by a non-success response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ForecastError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
