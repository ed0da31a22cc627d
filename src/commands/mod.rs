//! Command implementations for the astro-stats CLI
//!
//! Handlers take the hydrated store and a writer, so they can be driven by
//! `main` against stdout or by tests against a buffer.

pub mod common;
pub mod jumps;
pub mod players;
pub mod teams;


use std::path::{Path, PathBuf};

use crate::{
    cli::types::StorageBackend,
    core::{default_data_dir, sqlite_path},
    error::{Result, RosterError},
    roster::RosterStore,
    storage::{FileStorage, KeyValueStorage, MemoryStorage, SqliteStorage},
    DATA_DIR_ENV_VAR,
};

/// Storage picked at runtime by `--backend`.
pub type DynStorage = Box<dyn KeyValueStorage + Send>;

/// Resolve the data directory from the flag, the environment, or the
/// platform default, in that order.
pub fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    default_data_dir().ok_or_else(|| RosterError::MissingDataDir {
        env_var: DATA_DIR_ENV_VAR.to_string(),
    })
}

/// Open the selected storage backend in `data_dir`.
pub fn open_storage(backend: StorageBackend, data_dir: &Path) -> Result<DynStorage> {
    let storage: DynStorage = match backend {
        StorageBackend::File => Box::new(FileStorage::new(data_dir)),
        StorageBackend::Sqlite => Box::new(SqliteStorage::open(&sqlite_path(data_dir))?),
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    };
    Ok(storage)
}

/// Open storage and hydrate a store over it.
pub async fn open_store(
    backend: StorageBackend,
    data_dir: Option<PathBuf>,
) -> Result<RosterStore<DynStorage>> {
    let data_dir = resolve_data_dir(data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), %backend, "opening roster storage");
    let storage = open_storage(backend, &data_dir)?;
    RosterStore::open(storage).await
}
