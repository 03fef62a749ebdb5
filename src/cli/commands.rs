//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer type models from annotated JSON examples
#[derive(Parser, Debug)]
#[command(name = "jsonmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generator configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full type model
    Analyze {
        /// Document files or directories of `*.json` documents
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },

    /// Print the type registry in emission order
    Types {
        /// Document files or directories of `*.json` documents
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },

    /// Print the operation names found in the documents
    Functions {
        /// Document files or directories of `*.json` documents
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },

    /// Validate documents without printing the model
    Check {
        /// Document files or directories of `*.json` documents
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },
}

impl Commands {
    pub fn inputs(&self) -> &[PathBuf] {
        match self {
            Commands::Analyze { input }
            | Commands::Types { input }
            | Commands::Functions { input }
            | Commands::Check { input } => input,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Indented JSON
    Pretty,
}
