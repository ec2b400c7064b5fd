//! Error types for Notion data acquisition

use thiserror::Error;

/// Result type alias for input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur while fetching data from Notion
#[derive(Error, Debug)]
pub enum InputError {
    /// Required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// HTTP transport or JSON decode errors from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Notion API returned a non-success status
    #[error("Notion API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// Response did not have the shape we expect
    #[error("Unexpected payload: {0}")]
    Payload(String),
}
