//! Error types for report delivery

use thiserror::Error;

/// Result type alias for delivery operations
pub type Result<T> = std::result::Result<T, DeliveryError>;

/// Errors that can occur while delivering a report
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// Required configuration value is absent
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    /// File-system errors while writing report files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configured mailbox failed to parse
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The email message could not be assembled
    #[error("Email build error: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
