//! # typed-kv
//!
//! A typed access layer over an ordered byte-oriented key-value store.
//!
//! Keys are encoded so that unsigned byte-wise order of the encodings
//! matches the natural order of the key type, which makes range scans over
//! typed keys behave like range scans over the keys themselves. Values are
//! opaque and go through their own [`ValueCodec`].
//!
//! ## Features
//!
//! - **Order-preserving keys**: text, byte strings, fixed-size byte blocks,
//!   and fixed-width big-endian integers (signed ones with the sign bit
//!   flipped)
//! - **Custom keys**: implement [`StoreKey`] or pass a [`KeyCodec::custom`] pair
//! - **Backends**: sled on disk ([`SledStore`]) or in memory ([`MemStore`])
//! - **Scans**: half-open `[from, to)` ranges with early stop through the
//!   visitor's error
//!
//! ## Example
//!
//! ```rust,no_run
//! use borsh::{BorshDeserialize, BorshSerialize};
//! use typed_kv::{SledStore, SledStoreConfig, TypedStore, borsh_value_codec, error::Result};
//!
//! #[derive(BorshSerialize, BorshDeserialize, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! borsh_value_codec!(User);
//!
//! fn main() -> Result<()> {
//!     let raw = SledStore::open(&SledStoreConfig::new("mydb").with_tree("users"))?;
//!     let users: TypedStore<u32, User> = TypedStore::new(raw);
//!
//!     let user = User {
//!         id: 1,
//!         name: "Alice".to_string(),
//!     };
//!     users.put(&user.id, &user)?;
//!
//!     let retrieved = users.get(&1)?;
//!     println!("{:?}", retrieved);
//!
//!     let first_ten = users.collect(&0, &10)?;
//!     println!("{} users below id 10", first_ten.len());
//!
//!     users.close()
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod instrumentation;
pub mod key;
pub mod macros;
pub mod mem_store;
pub mod raw;
pub mod sled_store;
pub mod store;
#[cfg(feature = "test_utils")]
pub mod test_utils;

// Re-export main types
pub use codec::{CodecError, CodecResult, ValueCodec};
pub use config::SledStoreConfig;
pub use error::{Error, Result};
pub use key::{KeyCodec, KeyKind, StoreKey};
pub use mem_store::MemStore;
pub use raw::RawStore;
pub use sled_store::SledStore;
pub use store::TypedStore;

#[doc(hidden)]
pub mod __private {
    pub use borsh;
}
