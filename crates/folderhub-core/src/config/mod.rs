//! Application configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate and
//! overlaid with `FOLDERHUB__*` environment variables. Each sub-module
//! represents a logical configuration section.

pub mod logging;
pub mod seed;

use std::path::Path;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::seed::SeedConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Seed dataset settings.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: every field has a default, so the
    /// result is then built from defaults and environment variables prefixed
    /// with `FOLDERHUB__` (e.g. `FOLDERHUB__LOGGING__LEVEL=debug`).
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::from(Path::new(path)).required(false))
            .add_source(
                config::Environment::with_prefix("FOLDERHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::types::OrgId;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");

        let config = AppConfig::load(path.to_str().expect("utf-8 path")).expect("load");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.seed.file.is_none());
        assert_eq!(config.seed.default_org_id, seed::default_org_id());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            r#"
[logging]
level = "debug"
format = "json"

[seed]
file = "data/folders.json"
default_org_id = "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7"

[seed.generator]
organizations = 4
max_depth = 2
"#
        )
        .expect("write");

        let config = AppConfig::load(file.path().to_str().expect("utf-8 path")).expect("load");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.seed.file.as_deref(), Some("data/folders.json"));
        assert_eq!(
            config.seed.default_org_id,
            "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7"
                .parse::<OrgId>()
                .expect("uuid")
        );
        assert_eq!(config.seed.generator.organizations, 4);
        assert_eq!(config.seed.generator.max_depth, 2);
        assert_eq!(
            config.seed.generator.folders_per_org,
            seed::GeneratorConfig::default().folders_per_org
        );
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("tempfile");
        writeln!(file, "[logging\nlevel = ").expect("write");

        let err = AppConfig::load(file.path().to_str().expect("utf-8 path")).unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
