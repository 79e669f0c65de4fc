use std::{
    collections::BTreeMap,
    ops::Bound,
    result::Result as StdResult,
    sync::atomic::{AtomicUsize, Ordering},
};

use parking_lot::RwLock;
use tracing::trace;

use crate::{
    error::{Error, Result},
    instrumentation::components,
    raw::{RawStore, is_vacuous},
};

/// Volatile [`RawStore`] over a `BTreeMap`.
#[derive(Debug, Default)]
pub struct MemStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    open_scans: AtomicUsize,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of range scans currently holding a snapshot.
    pub fn open_scans(&self) -> usize {
        self.open_scans.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Registers a scan for as long as it is alive.
struct ScanGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> ScanGuard<'a> {
    fn acquire(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self { counter }
    }
}

impl Drop for ScanGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::AcqRel);
    }
}

impl RawStore for MemStore {
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        self.entries.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.entries.read().get(key).cloned().ok_or(Error::NotFound)
    }

    fn has(&self, key: &[u8]) -> Result<bool> {
        Ok(self.entries.read().contains_key(key))
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn range<F, E>(&self, from: &[u8], to: &[u8], mut visit: F) -> StdResult<(), E>
    where
        F: FnMut(&[u8], &[u8]) -> StdResult<(), E>,
        E: From<Error>,
    {
        // BTreeMap::range panics on inverted bounds.
        if is_vacuous(from, to) {
            return Ok(());
        }

        let _guard = ScanGuard::acquire(&self.open_scans);

        // Copy the rows out so visitors can write to this store.
        let snapshot: Vec<(Vec<u8>, Vec<u8>)> = self
            .entries
            .read()
            .range::<[u8], _>((Bound::Included(from), Bound::Excluded(to)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        trace!(
            component = components::KV_RAW_MEM,
            rows = snapshot.len(),
            "range scan snapshot taken"
        );

        for (key, value) in &snapshot {
            visit(key, value)?;
        }
        Ok(())
    }

    fn close(self) -> Result<()> {
        Ok(())
    }
}
