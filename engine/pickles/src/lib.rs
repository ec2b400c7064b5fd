//! Pickles - Personal Insight Analytics System
//!
//! Command-line front end for the Pickles pipeline: fetch journal data from
//! Notion, run a domi or aga analysis over it, and deliver the report to the
//! console, email, or files. Supports one-shot runs and a weekly schedule.

pub mod args;
pub mod config;
pub mod options;
pub mod pipeline;
pub mod scheduler;
pub mod usage;

pub use args::CliArgs;
pub use config::PicklesConfig;
pub use pipeline::Pipeline;
pub use scheduler::PipelineScheduler;
