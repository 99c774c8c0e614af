//! Seed dataset generation command.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_service::{SampleGenerator, seed};

/// Arguments for `generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output file
    #[arg(short, long)]
    pub out: PathBuf,
    /// Number of organizations
    #[arg(long)]
    pub organizations: Option<usize>,
    /// Folders per organization
    #[arg(long)]
    pub folders_per_org: Option<usize>,
    /// Maximum folder depth
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// RNG seed
    #[arg(long)]
    pub rng_seed: Option<u64>,
}

/// Execute the generate command
pub fn execute(args: &GenerateArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut settings = config.seed.generator.clone();
    if let Some(n) = args.organizations {
        settings.organizations = n;
    }
    if let Some(n) = args.folders_per_org {
        settings.folders_per_org = n;
    }
    if let Some(n) = args.max_depth {
        settings.max_depth = n;
    }
    if let Some(n) = args.rng_seed {
        settings.rng_seed = n;
    }

    let folders = SampleGenerator::new(settings).generate();
    seed::write_to_path(&args.out, &folders)?;

    output::print_success(&format!(
        "Wrote {} folders to {}",
        folders.len(),
        args.out.display()
    ));
    Ok(())
}
