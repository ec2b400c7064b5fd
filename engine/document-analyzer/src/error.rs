//! Error types for the analysis layer

use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while generating insights
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// HTTP transport or JSON decode errors from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// OpenAI API returned a non-success status
    #[error("OpenAI API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The model reply carried no message output
    #[error("No message block found in model response")]
    MissingMessage,
}
