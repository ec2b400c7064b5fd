//! Notion Input Service
//!
//! This crate fetches journal data from the Notion API for the Pickles
//! pipeline. It supports two data sources: dated entries from a journal
//! database, and recently created documents found via workspace search.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod source;

pub use config::NotionConfig;
pub use error::{InputError, Result};
pub use input::NotionInput;
pub use models::Document;
pub use source::DataSource;
