//! Exercise library tooling
//!
//! Command-line front end for two independent jobs: removing a page range
//! from a PDF (`pagefilter-core`) and writing the PDF manifest of a
//! directory (`manifest-core`).

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

pub use config::{Config, ManifestConfig, OutputSpec, RemovePagesConfig};
pub use error::ToolError;
pub use runner::{run_config, run_manifest, run_remove_pages, RunSummary};
