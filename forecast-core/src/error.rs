use reqwest::StatusCode;
use thiserror::Error;

/// Why a forecast could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to send forecast request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Forecast request failed with status {status}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse forecast response as JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl FetchError {
    /// Raw response body, when the server answered at all.
    pub fn body(&self) -> Option<&str> {
        match self {
            FetchError::Transport(_) => None,
            FetchError::Status { body, .. } | FetchError::Json { body, .. } => Some(body),
        }
    }
}

/// The response parsed as JSON but does not look like a forecast.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Forecast response has an unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("Forecast entry has an out-of-range timestamp: {0}")]
    Timestamp(i64),

    #[error("Forecast entry at {0} has no weather description")]
    MissingDescription(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("City must not be empty")]
    EmptyCity,

    #[error("Country code must not be empty")]
    EmptyCountry,
}
