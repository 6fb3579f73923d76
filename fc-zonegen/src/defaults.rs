use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Per-fabric defaults read from a TOML file.
///
/// ```toml
/// vsan = "10"
/// zoneset_name = "prodzs"
/// zonetype = "1:1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default)]
    pub vsan: Option<String>,
    #[serde(default)]
    pub zoneset_name: Option<String>,
    #[serde(default)]
    pub zonetype: Option<String>,
}

/// Errors returned when loading a defaults file.
#[derive(Debug, Error)]
pub enum DefaultsLoadError {
    #[error("failed to read defaults file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse defaults file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load fabric defaults from a TOML file.
pub fn load_defaults(path: &Path) -> Result<Defaults, DefaultsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DefaultsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_defaults(&raw, path.display().to_string())
}

fn parse_defaults(raw: &str, path: String) -> Result<Defaults, DefaultsLoadError> {
    toml::from_str(raw).map_err(|source| DefaultsLoadError::Parse { path, source })
}
