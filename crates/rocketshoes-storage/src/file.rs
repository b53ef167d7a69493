//! # File Storage
//!
//! A [`KeyValueStore`] kept in a single JSON file, standing in for the
//! browser's `localStorage` when the cart runs outside a browser.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ~/.local/share/rocketshoes/cart.json                                  │
//! │                                                                         │
//! │  {                                                                      │
//! │    "@RocketShoes:cart": "[{\"id\":1,\"title\":...,\"amount\":2}]"      │
//! │  }                                                                      │
//! │                                                                         │
//! │  Values are stored as strings, exactly as localStorage holds them.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write Path
//! ```text
//! set(key, value)
//!      │
//!      ▼
//! read current map (missing file = empty map)
//!      │
//!      ▼
//! write cart.json.tmp ──► rename over cart.json
//! ```
//! A crash before the rename leaves the previous file in place.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;

/// File-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> StorageResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents =
            serde_json::to_string_pretty(map).map_err(|e| StorageError::Encode(e.to_string()))?;

        let tmp = self.temp_path();
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("storage"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut map = self.read_map()?;
        Ok(map.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // Keep other keys: a corrupt file is reported rather than clobbered
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)?;

        debug!(path = ?self.path, key = %key, bytes = value.len(), "Storage value written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
