//! Application settings.
//!
//! The one durable flag the dashboard keeps is whether first-run setup has
//! completed. It lives in an explicit, injected store, never read as
//! ambient global state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Home directory not found")]
    NoHomeDir,
}

/// Resolve the default settings file path under the user's home directory.
pub fn get_settings_path() -> Result<PathBuf, SettingsError> {
    let home = home::home_dir().ok_or(SettingsError::NoHomeDir)?;
    Ok(home.join(".boardwatch").join("settings.json"))
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub first_run_completed: bool,
}

/// File-backed settings store with explicit get/set operations.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load settings, treating a missing file as defaults.
    pub fn get(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let buf = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Persist settings, creating parent directories as needed. Overwrites
    /// any existing file.
    pub fn set(&self, settings: &Settings) -> Result<(), SettingsError> {
        write_settings(&self.path, settings)
    }

    /// Record first-run completion if it is not already recorded.
    pub fn mark_first_run_completed(&self) -> Result<(), SettingsError> {
        let mut settings = self.get()?;
        if !settings.first_run_completed {
            settings.first_run_completed = true;
            self.set(&settings)?;
        }
        Ok(())
    }
}

fn write_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved settings file should return the same settings.
    fn test_get_recovers_saved_settings() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        let settings = Settings {
            first_run_completed: true,
        };
        store.set(&settings).unwrap();
        assert_eq!(store.get().unwrap(), settings);
    }

    #[test]
    // A missing file reads as defaults rather than an error.
    fn test_missing_file_reads_as_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.get().unwrap(), Settings::default());
    }

    #[test]
    // Saving should create directories if they don't exist.
    fn test_set_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("settings.json");
        let store = SettingsStore::new(path.clone());

        store.set(&Settings::default()).unwrap();
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    // Marking first run twice is stable.
    fn test_mark_first_run_completed_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));

        store.mark_first_run_completed().unwrap();
        store.mark_first_run_completed().unwrap();
        assert!(store.get().unwrap().first_run_completed);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_get_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let store = SettingsStore::new(path);
        assert!(store.get().is_err());
    }
}
