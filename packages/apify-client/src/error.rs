//! Error types for the Apify client.

use thiserror::Error;

/// Result type for Apify client operations.
pub type Result<T> = std::result::Result<T, ApifyError>;

#[derive(Debug, Error)]
pub enum ApifyError {
    /// Transport failure or undecodable body
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Apify API
    #[error("Apify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The actor run reached a terminal state other than SUCCEEDED
    #[error("Actor run ended with status {0}")]
    RunFailed(String),
}
