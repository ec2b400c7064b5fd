//! Report Delivery
//!
//! This crate sends a finished analysis report to its destinations: the
//! console, email (plain text or HTML over SMTP), or timestamped files
//! (plain text or HTML).

pub mod config;
pub mod delivery;
pub mod error;
pub mod html;
pub mod method;

pub use config::{DeliveryConfig, EmailConfig, FileConfig};
pub use delivery::ReportDelivery;
pub use error::{DeliveryError, Result};
pub use method::DeliveryMethod;
