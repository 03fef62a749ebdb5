//! CLI runner - executes commands

use crate::aggregate::{DocumentSetAggregator, TypeModel};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::GeneratorConfig;
use crate::error::{Result, ResultExt};
use crate::loader::load_inputs;
use serde::Serialize;
use serde_json::json;
use std::fs;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let model = self.build_model(&config)?;

        match &self.cli.command {
            Commands::Analyze { .. } => self.output(&model),
            Commands::Types { .. } => self.output(&model.registry),
            Commands::Functions { .. } => self.output(&model.function_names),
            Commands::Check { .. } => self.output(&json!({
                "status": "OK",
                "documents": model.documents.len(),
                "types": model.registry.len(),
            })),
        }
    }

    /// Load configuration, falling back to defaults
    fn load_config(&self) -> Result<GeneratorConfig> {
        match &self.cli.config {
            Some(path) => GeneratorConfig::from_file(path),
            None => Ok(GeneratorConfig::default()),
        }
    }

    fn build_model(&self, config: &GeneratorConfig) -> Result<TypeModel> {
        let documents = load_inputs(self.cli.command.inputs())?;
        info!("loaded {} documents", documents.len());
        DocumentSetAggregator::new(config).run(&documents)
    }

    /// Write a value to the output file or stdout
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };

        match &self.cli.output {
            Some(path) => fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write output '{}'", path.display())),
            None => {
                println!("{text}");
                Ok(())
            }
        }
    }
}
