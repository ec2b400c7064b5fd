//! Document Analyzer
//!
//! This crate turns a window of fetched documents into an insight report:
//! it filters out noise, computes basic statistics, and asks the OpenAI
//! Responses API for an analysis written to a per-type prompt (domi or aga).

pub mod analysis_type;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod models;
pub mod prompts;

pub use analysis_type::AnalysisType;
pub use analyzer::DocumentAnalyzer;
pub use config::AnalyzerConfig;
pub use error::{AnalysisError, Result};
pub use models::AnalysisReport;
