//! Configuration types for swatch
//!
//! Defines:
//! - `Settings` - Global settings (config.toml)
//! - `StorageSettings` / `StorageBackend` - where the theme preference lives
//! - `OutputSettings` / `OutputFormat` - how the CLI reports changes

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Preferences file for the `file` backend (defaults to the data dir)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Where the selected theme id is persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
    None,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::File => write!(f, "file"),
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::None => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
}

/// CLI output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `:root { ... }` stylesheet
    #[default]
    Css,
    /// NDJSON change events
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.storage.backend, StorageBackend::File);
        assert!(settings.storage.path.is_none());
        assert_eq!(settings.output.format, OutputFormat::Css);
    }

    #[test]
    fn test_storage_backend_deserialize() {
        let settings: Settings = toml::from_str("[storage]\nbackend = \"none\"\n").unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::None);

        let settings: Settings = toml::from_str("[storage]\nbackend = \"memory\"\n").unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(toml::from_str::<Settings>("[storage]\nbackend = \"redis\"\n").is_err());
    }

    #[test]
    fn test_storage_backend_display() {
        assert_eq!(StorageBackend::File.to_string(), "file");
        assert_eq!(StorageBackend::None.to_string(), "none");
    }

    #[test]
    fn test_settings_serialize_round_trip() {
        let settings = Settings {
            storage: StorageSettings {
                backend: StorageBackend::File,
                path: Some(PathBuf::from("/tmp/prefs.toml")),
            },
            output: OutputSettings {
                format: OutputFormat::Json,
            },
        };
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
