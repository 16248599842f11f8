use thiserror::Error;

/// Why the announcement list could not be obtained.
/// Always distinct from "the list is empty".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("Bad endpoint URL: {0}")]
    BadUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_decode() {
            FetchError::JsonParse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
