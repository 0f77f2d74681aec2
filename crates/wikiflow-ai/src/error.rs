use thiserror::Error;

/// Errors produced while talking to the hosted model.
///
/// These never escape the gateway: the public operations convert every
/// failure into a fixed fallback string.
#[derive(Error, Debug)]
pub enum AiError {
    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Model endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not carry the expected shape.
    #[error("Malformed model response: {0}")]
    Malformed(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AiError>;
