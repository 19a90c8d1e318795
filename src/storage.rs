//! Directory-backed key/value storage.
//!
//! Each key is stored as `<key>.json` inside the storage directory and holds a
//! JSON-encoded value. Collections are always read and written as a whole:
//! callers load the entire collection, modify it in memory and write it back.
//! Nothing is locked, so two processes sharing a directory race and the last
//! writer wins.

use crate::config;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Persistent key/value store for the SDK's collections and preferences.
pub struct LocalStorage {
    /// Directory where values are stored.
    pub dir: PathBuf,
}

impl LocalStorage {
    /// Open storage rooted at `dir`.
    ///
    /// If `dir` is `None`, uses the platform-appropriate default data directory.
    /// Creates the directory if it does not exist.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_storage_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Store a raw value under `key`.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so an interrupted write never leaves a truncated value behind.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }

    /// Remove the value stored under `key`. Missing keys are ignored.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load a JSON array stored under `key`.
    ///
    /// A missing, unreadable or non-array value yields an empty collection:
    /// it is treated as first use rather than as an error. Elements that do
    /// not decode as `T` are skipped one by one, so the rest survive.
    pub fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to read stored collection, starting empty");
                return Vec::new();
            }
        };
        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(key, error = %e, "stored collection is not an array, starting empty");
                return Vec::new();
            }
        };
        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key, index, error = %e, "skipping unreadable stored entry");
                    None
                }
            })
            .collect()
    }

    /// Replace the collection stored under `key`.
    pub fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let encoded = serde_json::to_string(items)?;
        self.set_item(key, &encoded)?;
        debug!(key, len = items.len(), "collection saved");
        Ok(())
    }

    /// The stored UI theme name, or the default theme.
    pub fn theme(&self) -> String {
        self.get_item(config::THEME_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<String>(&raw).ok())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| config::DEFAULT_THEME.to_string())
    }

    /// Persist the UI theme name.
    pub fn set_theme(&self, name: &str) -> Result<()> {
        let encoded = serde_json::to_string(name)?;
        self.set_item(config::THEME_KEY, &encoded)
    }

    /// Remove every stored value and recreate the storage directory.
    pub fn clear(&self) -> Result<()> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir)?;
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// The directory values are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
