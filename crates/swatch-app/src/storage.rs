//! Preference storage backends
//!
//! Storage is best-effort: callers treat a missing value or a failed write
//! as "use the default" rather than as an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use swatch_core::prelude::*;

/// Key under which the active theme id is stored
pub const PREFERENCE_KEY: &str = "theme-id";

const FILE_HEADER: &str = "# swatch user preferences\n\
                           # Written by `swatch apply --save`; safe to edit by hand\n\n";

/// Persistent key-value slot for user preferences
pub trait PreferenceStorage {
    /// Read a stored value. `None` when unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Whether this backend persists anything at all
    fn is_available(&self) -> bool {
        true
    }
}

impl<P: PreferenceStorage + ?Sized> PreferenceStorage for &mut P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<P: PreferenceStorage + ?Sized> PreferenceStorage for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// No-op
// ─────────────────────────────────────────────────────────────────────────────

/// Storage for hosts with nowhere to persist
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl PreferenceStorage for NoopStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<()> {
        trace!("Storage unavailable, dropping write to {}", key);
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory
// ─────────────────────────────────────────────────────────────────────────────

/// Process-local storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML file
// ─────────────────────────────────────────────────────────────────────────────

/// Preferences persisted as a TOML table
///
/// Only string values are read back as preferences. Other keys, whatever
/// their type, are carried through writes untouched.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_local_dir>/swatch/preferences.toml`
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swatch")
            .join("preferences.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole table. A missing file is an empty table.
    fn load(&self) -> Result<toml::Table> {
        if !self.path.exists() {
            debug!("No preferences file at {:?}", self.path);
            return Ok(toml::Table::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(table)
    }

    /// Atomic write: temp file in the same directory, then rename
    fn store(&self, table: &toml::Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::storage(format!("Failed to create {:?}: {}", parent, e))
                })?;
            }
        }

        let content = toml::to_string_pretty(table)?;

        let temp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&temp_path, format!("{}{}", FILE_HEADER, content))
            .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.load().ok()?.remove(key)? {
            toml::Value::String(value) => Some(value),
            other => {
                warn!("Ignoring non-string {} = {} in {:?}", key, other, self.path);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A file we cannot parse is left alone rather than replaced
        let mut table = self.load()?;
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        self.store(&table)
    }
}
