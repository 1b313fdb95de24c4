use thiserror::Error;

pub type Result<T> = std::result::Result<T, TwitterError>;

#[derive(Debug, Error)]
pub enum TwitterError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("X API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to sign request: {0}")]
    Signing(String),
}
