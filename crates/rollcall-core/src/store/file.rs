use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::KeyValueStore;
use crate::config::Config;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open the store in the directory the config points at.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.data_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stored value: {}", key))?;
        debug!(key, bytes = contents.len(), "Read stored value");
        Ok(Some(contents))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write stored value: {}", key))?;
        debug!(key, bytes = value.len(), "Wrote stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path(key);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove stored value: {}", key))?;
            debug!(key, "Removed stored value");
        }
        Ok(())
    }
}
