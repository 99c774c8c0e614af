//! CLI command definitions and dispatch.

pub mod folder;
pub mod generate;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_service::{FolderStore, seed};

/// FolderHub: organization-scoped folder hierarchies
#[derive(Debug, Parser)]
#[command(name = "folderhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Seed file overriding the configured one
    #[arg(short, long, global = true)]
    pub seed: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder queries and moves
    #[command(flatten)]
    Folder(folder::FolderCommand),
    /// Generate a random seed dataset
    Generate(generate::GenerateArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<(), AppError> {
        let mut config = load_config(&self.config)?;
        if let Some(seed) = &self.seed {
            config.seed.file = Some(seed.clone());
        }

        match &self.command {
            Commands::Folder(command) => folder::execute(command, &config, self.format),
            Commands::Generate(args) => generate::execute(args, &config),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: build the folder store from the configured seed
pub fn open_store(config: &AppConfig) -> Result<FolderStore, AppError> {
    let folders = seed::load(&config.seed)?;
    tracing::debug!(count = folders.len(), "Seed loaded");
    Ok(FolderStore::new(folders))
}
