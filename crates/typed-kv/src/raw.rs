use std::result::Result as StdResult;

use crate::error::{Error, Result};

/// Byte-oriented ordered key-value store underneath a [`TypedStore`](crate::TypedStore).
///
/// Implementations translate each call 1:1 onto their engine and never
/// interpret key or value bytes.
pub trait RawStore {
    /// Writes `value` under `key`, replacing any previous value.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Returns the value under `key`, or [`Error::NotFound`].
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;

    /// Returns whether `key` is present. Absence is never an error.
    fn has(&self, key: &[u8]) -> Result<bool>;

    /// Removes `key`. Removing an absent key succeeds.
    fn delete(&self, key: &[u8]) -> Result<()>;

    /// Visits every pair with `from <= key < to` in ascending byte order.
    ///
    /// The first error returned by `visit` stops the scan and is returned
    /// as-is. An empty or inverted interval visits nothing.
    fn range<F, E>(&self, from: &[u8], to: &[u8], visit: F) -> StdResult<(), E>
    where
        F: FnMut(&[u8], &[u8]) -> StdResult<(), E>,
        E: From<Error>;

    /// Flushes and releases the engine.
    fn close(self) -> Result<()>
    where
        Self: Sized;
}

/// Whether `[from, to)` contains no byte strings at all.
pub(crate) fn is_vacuous(from: &[u8], to: &[u8]) -> bool {
    from >= to
}
