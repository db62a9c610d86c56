//! Per-user settings store.
//!
//! The host activity reads and writes its color pair through the
//! [`SettingsStore`] trait so the backing store can be swapped in tests.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// Key under which the color pair is stored.
pub const COLOR_KEY: &str = "color";

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Settings error: {0}")]
    Other(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// String key/value settings.
pub trait SettingsStore {
    /// Read a value. `Ok(None)` when the key is unset.
    fn get(&self, key: &str) -> SettingsResult<Option<String>>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> SettingsResult<()>;
}

/// In-memory settings for testing and ephemeral use.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `key = value`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| SettingsError::Other(format!("Lock error: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| SettingsError::Other(format!("Lock error: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings persisted as a flat JSON object.
///
/// Every call reads the file again, so edits made by other processes are
/// picked up. A missing file is treated as an empty store.
#[derive(Debug)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Use the settings file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the default location.
    ///
    /// On Linux: `~/.config/munsell/settings.json`
    /// On Windows: `%APPDATA%\munsell\settings.json`
    pub fn default_location() -> SettingsResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::Io("Could not determine home directory".to_string()))?;
        Ok(Self::new(base.join("munsell").join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> SettingsResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| {
            SettingsError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&json).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            SettingsError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_get_set() {
        let store = MemorySettings::new();
        assert_eq!(store.get(COLOR_KEY).unwrap(), None);

        store.set(COLOR_KEY, "#A0FFA0,#FF8080").unwrap();
        assert_eq!(store.get(COLOR_KEY).unwrap().as_deref(), Some("#A0FFA0,#FF8080"));
    }

    #[test]
    fn test_memory_with_value() {
        let store = MemorySettings::with_value("nick", "ada");
        assert_eq!(store.get("nick").unwrap().as_deref(), Some("ada"));
    }

    #[test]
    fn test_file_missing_is_unset() {
        let dir = tempdir().unwrap();
        let store = FileSettings::new(dir.path().join("settings.json"));
        assert_eq!(store.get(COLOR_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_set_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("munsell").join("settings.json");
        let store = FileSettings::new(&path);

        store.set(COLOR_KEY, "#112233,#445566").unwrap();
        assert!(path.exists());
        assert_eq!(store.get(COLOR_KEY).unwrap().as_deref(), Some("#112233,#445566"));
    }

    #[test]
    fn test_file_preserves_other_keys() {
        let dir = tempdir().unwrap();
        let store = FileSettings::new(dir.path().join("settings.json"));

        store.set("nick", "ada").unwrap();
        store.set(COLOR_KEY, "#112233,#445566").unwrap();
        store.set(COLOR_KEY, "#000000,#FFFFFF").unwrap();

        let reopened = FileSettings::new(store.path());
        assert_eq!(reopened.get("nick").unwrap().as_deref(), Some("ada"));
        assert_eq!(reopened.get(COLOR_KEY).unwrap().as_deref(), Some("#000000,#FFFFFF"));
    }

    #[test]
    fn test_file_corrupt_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSettings::new(&path);
        assert!(matches!(store.get(COLOR_KEY), Err(SettingsError::Serialization(_))));
    }
}
