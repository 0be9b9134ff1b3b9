//! Durable key-value storage for the session slot.
//!
//! This module provides the `KeyValueStore` trait and two implementations:
//! - `FileStore`: one pretty-printed JSON file per key in a data directory
//! - `MemoryStore`: a map held in memory, for tests and embedding

pub mod file;
pub mod memory;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

pub use file::FileStore;
pub use memory::MemoryStore;

pub trait KeyValueStore {
    /// Raw value for `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let Some(contents) = self.get(key)? else {
            return Ok(None);
        };
        let value: T = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse stored value: {}", key))?;
        Ok(Some(value))
    }

    fn save_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let contents = serde_json::to_string_pretty(value)?;
        self.put(key, &contents)
    }
}
