//! FolderHub demo entry point.
//!
//! Loads the configured seed dataset into a folder store and prints the whole
//! collection followed by the default organization's folders.

use tracing_subscriber::{EnvFilter, fmt};

use folderhub_core::config::AppConfig;
use folderhub_core::error::AppError;
use folderhub_service::{FolderStore, seed};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(&config) {
        tracing::error!("FolderHub error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FOLDERHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn run(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FolderHub v{}", env!("CARGO_PKG_VERSION"));

    let folders = seed::load(&config.seed)?;
    let store = FolderStore::new(folders);

    println!("{}", serde_json::to_string_pretty(store.folders())?);

    let org_id = config.seed.default_org_id;
    let org_folders = store.list_by_organization(org_id)?;
    tracing::info!(org_id = %org_id, count = org_folders.len(), "Default organization folders");
    println!("{}", serde_json::to_string_pretty(&org_folders)?);

    Ok(())
}
