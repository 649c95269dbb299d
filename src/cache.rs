use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{CACHE_FILE_EXTENSION, CACHE_FILE_PREFIX};

/// On-disk store of fetched pages, one file per identifier.
///
/// Entries are short-lived: written on fetch, read once, then deleted.
/// There is no locking, callers process one identifier at a time.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `id`, e.g. `cache_10.0.0.0_24.html`.
    pub fn entry_path(&self, id: &str) -> PathBuf {
        self.dir.join(cache_file_name(id))
    }

    pub async fn exists(&self, id: &str) -> bool {
        fs::try_exists(self.entry_path(id)).await.unwrap_or(false)
    }

    pub async fn write(&self, id: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.entry_path(id);
        fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write cache file {}", path.display()))?;
        Ok(path)
    }

    pub async fn read(&self, id: &str) -> Result<Vec<u8>> {
        let path = self.entry_path(id);
        fs::read(&path)
            .await
            .with_context(|| format!("failed to read cache file {}", path.display()))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let path = self.entry_path(id);
        fs::remove_file(&path)
            .await
            .with_context(|| format!("failed to delete cache file {}", path.display()))
    }
}

/// Cache file name for an identifier, slashes replaced by underscores.
pub fn cache_file_name(id: &str) -> String {
    format!(
        "{}{}.{}",
        CACHE_FILE_PREFIX,
        id.replace('/', "_"),
        CACHE_FILE_EXTENSION
    )
}
