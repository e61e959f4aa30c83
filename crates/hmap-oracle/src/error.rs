//! Error types for oracle calls.

use thiserror::Error;

/// Errors from consulting the external model service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// No API key was configured.
    #[error("missing API key (set GEMINI_API_KEY or GOOGLE_API_KEY)")]
    MissingKey,
    /// Network request failed.
    #[error("network error: {0}")]
    Network(String),
    /// The service returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The service response had an unexpected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for OracleError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
