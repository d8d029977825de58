//! Settings loader for config.toml

use super::types::{Settings, StorageBackend, StorageSettings};
use crate::storage::{FileStorage, MemoryStorage, NoopStorage, PreferenceStorage};
use std::path::{Path, PathBuf};
use swatch_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "swatch";

const DEFAULT_CONFIG: &str = r#"# swatch configuration

[storage]
# Where the selected theme is remembered: "file", "memory" or "none"
backend = "file"
# Preferences file for the "file" backend
# Defaults to <data dir>/swatch/preferences.toml
# path = "/path/to/preferences.toml"

[output]
# "css" prints a :root stylesheet, "json" prints theme-changed events
format = "css"
"#;

/// `<config_dir>/swatch/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
        }
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

/// Build the preference storage named by `settings`
pub fn open_storage(settings: &StorageSettings) -> Box<dyn PreferenceStorage> {
    match settings.backend {
        StorageBackend::File => {
            let path = settings
                .path
                .clone()
                .unwrap_or_else(FileStorage::default_path);
            debug!("Using preferences file {:?}", path);
            Box::new(FileStorage::new(path))
        }
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
        StorageBackend::None => Box::new(NoopStorage),
    }
}
