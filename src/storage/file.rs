//! Directory-backed key-value storage

use super::KeyValueStorage;
use crate::core::{read_optional, remove_if_exists, write_string};
use crate::error::{Result, RosterError};
use std::path::{Path, PathBuf};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(RosterError::Storage {
                message: format!("Invalid storage key: {:?}", key),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(read_optional(&self.path_for(key)?)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        Ok(write_string(&self.path_for(key)?, value)?)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        Ok(remove_if_exists(&self.path_for(key)?)?)
    }
}
