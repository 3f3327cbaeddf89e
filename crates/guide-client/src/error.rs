//! Fetch errors
//!
//! Everything that can go wrong between issuing the request and holding
//! decoded records.

use thiserror::Error;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Response arrived with a status outside [200, 300)
    #[error("server returned {status} {status_text}: {body}")]
    HttpStatus {
        status: u16,
        status_text: String,
        body: String,
    },
    /// The request never completed
    #[error("request did not complete: {0}")]
    Transport(String),
    /// Body is not JSON, or not the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}
