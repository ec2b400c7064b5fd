//! Analysis prompts, one module per analysis type
//!
//! Kept separate so each prompt can evolve independently.

pub mod aga;
pub mod domi;

/// Shared preamble placed before the formatted documents
pub const BASE_TEMPLATE: &str = "Analyze the following data:\n\n";
