//! Flat JSON config store in the environment directory.

use std::fs;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::CliResult;

/// Key/value settings persisted as a single flat JSON object.
///
/// Reads tolerate a missing or unreadable file (treated as empty);
/// writes create the parent directory as needed.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Map<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Read a setting.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.load().get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }

    /// Write a setting.
    pub fn set(&self, key: &str, value: &str) -> CliResult<()> {
        let mut map = self.load();
        map.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&map)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        assert_eq!(store.get("vault_url"), None);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        store.set("vault_url", "https://vault.example").unwrap();
        assert_eq!(store.get("vault_url").as_deref(), Some("https://vault.example"));

        // Second key does not clobber the first.
        store.set("other", "x").unwrap();
        assert_eq!(store.get("vault_url").as_deref(), Some("https://vault.example"));
    }

    #[test]
    fn test_corrupt_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let store = ConfigStore::new(path);
        assert_eq!(store.get("vault_url"), None);
        // And a write recovers the file.
        store.set("vault_url", "v").unwrap();
        assert_eq!(store.get("vault_url").as_deref(), Some("v"));
    }
}
