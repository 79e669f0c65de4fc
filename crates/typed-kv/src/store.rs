use std::{fmt, marker::PhantomData, result::Result as StdResult};

use tracing::instrument;

use crate::{
    ValueCodec,
    error::{Error, Result},
    instrumentation::components,
    key::{KeyCodec, KeyKind, StoreKey},
    raw::RawStore,
    sled_store::SledStore,
};

/// Type-safe store of `T` values under `K` keys on top of a [`RawStore`].
///
/// Keys go through the [`KeyCodec`] picked at construction, values through
/// their [`ValueCodec`] impl. Nothing is written when encoding fails.
pub struct TypedStore<K, T, R = SledStore> {
    raw: R,
    keys: KeyCodec<K>,
    _phantom: PhantomData<fn() -> T>,
}

impl<K: StoreKey, T: ValueCodec, R: RawStore> TypedStore<K, T, R> {
    /// Creates a store using the built-in encoding of `K`.
    pub fn new(raw: R) -> Self {
        Self::with_key_codec(raw, KeyCodec::native())
    }
}

impl<K, T: ValueCodec, R: RawStore> TypedStore<K, T, R> {
    /// Creates a store with an explicit key codec.
    pub fn with_key_codec(raw: R, keys: KeyCodec<K>) -> Self {
        Self {
            raw,
            keys,
            _phantom: PhantomData,
        }
    }

    pub fn key_kind(&self) -> KeyKind {
        self.keys.kind()
    }

    /// Inserts or replaces the value under `key`.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn put(&self, key: &K, value: &T) -> Result<()> {
        let key = self.keys.encode(key)?;
        let value = value.encode_value()?;
        self.raw.put(&key, &value)
    }

    /// Retrieves the value under `key`, failing with [`Error::NotFound`] on a miss.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn get(&self, key: &K) -> Result<T> {
        let key = self.keys.encode(key)?;
        let value = self.raw.get(&key)?;
        Ok(T::decode_value(&value)?)
    }

    /// Returns whether a value is stored under `key`.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn has(&self, key: &K) -> Result<bool> {
        let key = self.keys.encode(key)?;
        self.raw.has(&key)
    }

    /// Removes `key`. Removing an absent key is not an error.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn delete(&self, key: &K) -> Result<()> {
        let key = self.keys.encode(key)?;
        self.raw.delete(&key)
    }

    /// Visits every row with `from <= key < to` in ascending encoded-key order.
    ///
    /// A row that fails to decode aborts the scan with its codec error. An
    /// error returned by `visit` stops the scan and is returned unchanged.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn range<F, E>(&self, from: &K, to: &K, mut visit: F) -> StdResult<(), E>
    where
        F: FnMut(K, T) -> StdResult<(), E>,
        E: From<Error>,
    {
        let from = self.keys.encode(from).map_err(|e| E::from(Error::from(e)))?;
        let to = self.keys.encode(to).map_err(|e| E::from(Error::from(e)))?;
        self.raw.range(&from, &to, |k, v| {
            let key = self.keys.decode(k).map_err(|e| E::from(Error::from(e)))?;
            let value = T::decode_value(v).map_err(|e| E::from(Error::from(e)))?;
            visit(key, value)
        })
    }

    /// Collects the values with `from <= key < to` in ascending key order.
    #[instrument(skip_all, fields(component = components::KV_TYPED, key_kind = %self.keys.kind()))]
    pub fn collect(&self, from: &K, to: &K) -> Result<Vec<T>> {
        let mut values = Vec::new();
        self.range(from, to, |_, value| {
            values.push(value);
            Ok::<_, Error>(())
        })?;
        Ok(values)
    }

    pub fn raw(&self) -> &R {
        &self.raw
    }

    pub fn into_raw(self) -> R {
        self.raw
    }

    /// Closes the underlying store. The typed store is consumed.
    pub fn close(self) -> Result<()> {
        self.raw.close()
    }
}

impl<K, T, R: fmt::Debug> fmt::Debug for TypedStore<K, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedStore")
            .field("raw", &self.raw)
            .field("keys", &self.keys)
            .finish()
    }
}
