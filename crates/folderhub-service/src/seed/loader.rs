//! JSON seed loading and saving.

use std::fs;
use std::path::Path;

use tracing::info;

use folderhub_core::config::seed::SeedConfig;
use folderhub_core::error::{AppError, ErrorKind};
use folderhub_core::result::AppResult;
use folderhub_entity::folder::Folder;

/// The bundled sample dataset.
const SAMPLE: &str = include_str!("../../data/sample.json");

/// Parses the bundled sample dataset.
pub fn sample() -> AppResult<Vec<Folder>> {
    parse(SAMPLE, "bundled sample")
}

/// Reads a JSON array of folders from `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Vec<Folder>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read seed file '{}'", path.display()),
            e,
        )
    })?;
    parse(&json, &path.display().to_string())
}

/// Loads the configured seed: the file when one is set, else the sample.
pub fn load(config: &SeedConfig) -> AppResult<Vec<Folder>> {
    let folders = match &config.file {
        Some(file) => load_from_path(file)?,
        None => sample()?,
    };
    info!(
        source = config.file.as_deref().unwrap_or("bundled sample"),
        count = folders.len(),
        "Seed folders loaded"
    );
    Ok(folders)
}

/// Writes `folders` to `path` as pretty-printed JSON.
pub fn write_to_path(path: impl AsRef<Path>, folders: &[Folder]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(folders)?;
    fs::write(path, json)?;
    Ok(())
}

fn parse(json: &str, origin: &str) -> AppResult<Vec<Folder>> {
    let folders: Vec<Folder> = serde_json::from_str(json)?;
    for (position, folder) in folders.iter().enumerate() {
        folder.validate().map_err(|e| {
            AppError::validation(format!("{origin}: record {position}: {}", e.message))
        })?;
    }
    Ok(folders)
}

#[cfg(test)]
mod tests {
    use folderhub_core::config::seed::DEFAULT_ORG_ID;

    use super::*;

    #[test]
    fn test_sample_is_well_formed() {
        let folders = sample().expect("sample parses");
        assert!(!folders.is_empty());
        assert!(folders.iter().any(|f| f.org_id == DEFAULT_ORG_ID));
    }

    #[test]
    fn test_rejects_path_not_ending_with_name() {
        let json = r#"[{
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "charlie",
            "org_id": "c1556e17-b7c0-45a3-a6ae-9546248fb17a",
            "paths": "alpha.bravo"
        }]"#;
        let err = parse(json, "inline").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.starts_with("inline: record 0"));
    }

    #[test]
    fn test_rejects_nil_organization() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("nil-org.json");
        std::fs::write(
            &file,
            r#"[{
                "id": "00000000-0000-0000-0000-000000000001",
                "name": "alpha",
                "org_id": "00000000-0000-0000-0000-000000000000",
                "paths": "alpha"
            }]"#,
        )
        .expect("write");

        let config = SeedConfig {
            file: Some(file.to_string_lossy().into_owned()),
            ..SeedConfig::default()
        };
        let err = load(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("record 0"));
        assert!(err.message.contains("nil organization"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse("[{", "inline").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_from_path(dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
