//! Centralized error types for SimpliStock.

use thiserror::Error;

/// Main error type for SimpliStock operations.
#[derive(Error, Debug)]
pub enum StockError {
    #[error(
        "GEMINI_API_KEY environment variable not set.\n\
         Set it with: export GEMINI_API_KEY=your-key"
    )]
    MissingApiKey,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Gemini response contained no analysis text")]
    EmptyResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for SimpliStock operations.
pub type StockResult<T> = Result<T, StockError>;

impl StockError {
    /// Create an invalid-query error.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }
}
