use std::{fs, result::Result as StdResult};

use sled::{Db, Tree};
use tracing::{debug, trace};

use crate::{
    config::SledStoreConfig,
    error::{Error, Result},
    instrumentation::components,
    raw::{RawStore, is_vacuous},
};

/// [`RawStore`] backed by a sled tree.
#[derive(Debug)]
pub struct SledStore {
    /// Kept so `close` can flush the whole database, not only our tree.
    db: Db,
    tree: Tree,
    sync_writes: bool,
}

impl SledStore {
    /// Opens (creating if needed) the database described by `config`.
    pub fn open(config: &SledStoreConfig) -> Result<Self> {
        if !config.temporary && !config.path.exists() {
            fs::create_dir_all(&config.path)?;
        }

        let db = config.sled_config().open()?;
        debug!(
            component = components::KV_RAW_SLED,
            path = %config.path.display(),
            temporary = config.temporary,
            "opened sled database"
        );
        Self::from_db(db, config.tree.as_deref(), config.sync_writes)
    }

    /// Opens a database that is deleted once the store is dropped.
    pub fn temporary() -> Result<Self> {
        Self::open(&SledStoreConfig::temporary())
    }

    /// Wraps an already opened database, using `tree` as the namespace.
    pub fn from_db(db: Db, tree: Option<&str>, sync_writes: bool) -> Result<Self> {
        let tree = match tree {
            Some(name) => db.open_tree(name)?,
            None => (*db).clone(),
        };
        Ok(Self {
            db,
            tree,
            sync_writes,
        })
    }

    fn sync(&self) -> Result<()> {
        if self.sync_writes {
            self.tree.flush()?;
        }
        Ok(())
    }
}

impl RawStore for SledStore {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.tree.insert(key, value)?;
        self.sync()
    }

    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.tree
            .get(key)?
            .map(|val| val.to_vec())
            .ok_or(Error::NotFound)
    }

    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.tree.contains_key(key)?)
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.tree.remove(key)?;
        self.sync()
    }

    fn range<F, E>(&self, from: &[u8], to: &[u8], mut visit: F) -> StdResult<(), E>
    where
        F: FnMut(&[u8], &[u8]) -> StdResult<(), E>,
        E: From<Error>,
    {
        if is_vacuous(from, to) {
            return Ok(());
        }

        // The iterator lives in this frame, so every return below releases it.
        let mut rows = 0usize;
        for item in self.tree.range(from..to) {
            let (key, value) = item.map_err(|e| E::from(Error::from(e)))?;
            visit(key.as_ref(), value.as_ref())?;
            rows += 1;
        }

        trace!(component = components::KV_RAW_SLED, rows, "range scan finished");
        Ok(())
    }

    fn close(self) -> Result<()> {
        self.tree.flush()?;
        self.db.flush()?;
        debug!(component = components::KV_RAW_SLED, "closed sled database");
        Ok(())
    }
}
