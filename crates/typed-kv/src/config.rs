use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default value for `path` in [`SledStoreConfig`].
const DEFAULT_PATH: &str = "kv-data";

/// Default page cache size in bytes (sled's own default).
const DEFAULT_CACHE_CAPACITY: u64 = 1024 * 1024 * 1024;

/// Settings for opening a [`SledStore`](crate::SledStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SledStoreConfig {
    /// Directory holding the database files.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Named tree to use as the namespace. Uses the default tree when unset.
    #[serde(default)]
    pub tree: Option<String>,

    /// Page cache size in bytes.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,

    /// Flush to disk before `put`/`delete` return.
    #[serde(default = "default_sync_writes")]
    pub sync_writes: bool,

    /// Delete the database when the store is dropped.
    #[serde(default)]
    pub temporary: bool,

    /// Background flush interval in ms, `None` disables it.
    #[serde(default)]
    pub flush_every_ms: Option<u64>,
}

fn default_path() -> PathBuf {
    DEFAULT_PATH.into()
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY
}

fn default_sync_writes() -> bool {
    true
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self::new(default_path())
    }
}

impl SledStoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tree: None,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            sync_writes: true,
            temporary: false,
            flush_every_ms: None,
        }
    }

    /// Configuration for a throwaway database, used by tests and benches.
    pub fn temporary() -> Self {
        Self {
            temporary: true,
            ..Self::new(env::temp_dir())
        }
    }

    pub fn with_tree(mut self, tree: impl Into<String>) -> Self {
        self.tree = Some(tree.into());
        self
    }

    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub(crate) fn sled_config(&self) -> sled::Config {
        let config = sled::Config::new()
            .cache_capacity(self.cache_capacity)
            .flush_every_ms(self.flush_every_ms);
        if self.temporary {
            config.temporary(true)
        } else {
            config.path(&self.path)
        }
    }
}
