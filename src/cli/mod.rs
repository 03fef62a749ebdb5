//! CLI module
//!
//! Command-line interface for building type models.
//!
//! # Commands
//!
//! - `analyze` - Print the full type model
//! - `types` - Print the type registry
//! - `functions` - Print operation names
//! - `check` - Validate documents

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
