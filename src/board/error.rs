//! Board API-specific error types.

/// Errors that can occur during board API operations.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),
}
