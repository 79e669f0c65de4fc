//! Order-preserving key encodings.
//!
//! Every built-in [`StoreKey`] impl produces bytes whose unsigned
//! lexicographic order matches the natural order of the key type:
//!
//! - text and byte strings are stored as their raw bytes,
//! - `[u8; N]` blocks are stored unchanged,
//! - unsigned integers are fixed-width big-endian,
//! - signed integers are fixed-width big-endian with the sign bit flipped, so
//!   `-1 < 0` still holds after encoding.
//!
//! Key types outside this set implement [`StoreKey`] themselves with
//! [`KeyKind::Custom`], or hand a [`KeyCodec::custom`] pair to the store. Their
//! ordering is whatever their encoding gives.

use std::{fmt, str::from_utf8};

use crate::codec::{CodecError, CodecResult};

/// The closed set of key encodings a store can be built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Text,
    Bytes,
    /// Fixed-size byte block such as a 32-byte hash.
    Block(usize),
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    /// Encoding supplied by the key type or by the caller.
    Custom,
}

impl KeyKind {
    /// Encoded width in bytes for fixed-width kinds.
    pub const fn width(self) -> Option<usize> {
        match self {
            KeyKind::Block(n) => Some(n),
            KeyKind::U8 | KeyKind::I8 => Some(1),
            KeyKind::U16 | KeyKind::I16 => Some(2),
            KeyKind::U32 | KeyKind::I32 => Some(4),
            KeyKind::U64 | KeyKind::I64 => Some(8),
            KeyKind::Text | KeyKind::Bytes | KeyKind::Custom => None,
        }
    }

    /// Whether byte order of the encoding is guaranteed to follow key order.
    pub const fn is_order_preserving(self) -> bool {
        !matches!(self, KeyKind::Custom)
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Text => f.write_str("text"),
            KeyKind::Bytes => f.write_str("bytes"),
            KeyKind::Block(n) => write!(f, "block{n}"),
            KeyKind::U8 => f.write_str("u8"),
            KeyKind::U16 => f.write_str("u16"),
            KeyKind::U32 => f.write_str("u32"),
            KeyKind::U64 => f.write_str("u64"),
            KeyKind::I8 => f.write_str("i8"),
            KeyKind::I16 => f.write_str("i16"),
            KeyKind::I32 => f.write_str("i32"),
            KeyKind::I64 => f.write_str("i64"),
            KeyKind::Custom => f.write_str("custom"),
        }
    }
}

/// A key type with a canonical, injective byte encoding.
pub trait StoreKey: Sized {
    const KIND: KeyKind;

    fn encode_key(&self) -> CodecResult<Vec<u8>>;
    fn decode_key(buf: &[u8]) -> CodecResult<Self>;
}

/// Copies `buf` into an `N`-byte array, rejecting any other length.
fn fixed_width<const N: usize>(kind: KeyKind, buf: &[u8]) -> CodecResult<[u8; N]> {
    <[u8; N]>::try_from(buf).map_err(|_| CodecError::IncorrectSize {
        kind,
        expected: N,
        actual: buf.len(),
    })
}

impl StoreKey for String {
    const KIND: KeyKind = KeyKind::Text;

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        Ok(from_utf8(buf)?.to_owned())
    }
}

impl StoreKey for Vec<u8> {
    const KIND: KeyKind = KeyKind::Bytes;

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        Ok(self.clone())
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        Ok(buf.to_vec())
    }
}

impl<const N: usize> StoreKey for [u8; N] {
    const KIND: KeyKind = KeyKind::Block(N);

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        Ok(self.to_vec())
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        fixed_width(Self::KIND, buf)
    }
}

macro_rules! impl_unsigned_key {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl StoreKey for $ty {
                const KIND: KeyKind = KeyKind::$kind;

                fn encode_key(&self) -> CodecResult<Vec<u8>> {
                    Ok(self.to_be_bytes().to_vec())
                }

                fn decode_key(buf: &[u8]) -> CodecResult<Self> {
                    Ok(<$ty>::from_be_bytes(fixed_width(Self::KIND, buf)?))
                }
            }
        )+
    };
}

// Flipping the sign bit maps MIN..=MAX onto 0..=uMAX monotonically.
macro_rules! impl_signed_key {
    ($($ty:ty as $uty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl StoreKey for $ty {
                const KIND: KeyKind = KeyKind::$kind;

                fn encode_key(&self) -> CodecResult<Vec<u8>> {
                    let biased = (*self as $uty) ^ (<$ty>::MIN as $uty);
                    Ok(biased.to_be_bytes().to_vec())
                }

                fn decode_key(buf: &[u8]) -> CodecResult<Self> {
                    let biased = <$uty>::from_be_bytes(fixed_width(Self::KIND, buf)?);
                    Ok((biased ^ (<$ty>::MIN as $uty)) as $ty)
                }
            }
        )+
    };
}

impl_unsigned_key!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
impl_signed_key!(i8 as u8 => I8, i16 as u16 => I16, i32 as u32 => I32, i64 as u64 => I64);

impl StoreKey for usize {
    const KIND: KeyKind = KeyKind::U64;

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        (*self as u64).encode_key()
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        let value = u64::decode_key(buf)?;
        usize::try_from(value).map_err(|_| CodecError::OutOfRange {
            kind: Self::KIND,
            value: value.into(),
        })
    }
}

impl StoreKey for isize {
    const KIND: KeyKind = KeyKind::I64;

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        (*self as i64).encode_key()
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        let value = i64::decode_key(buf)?;
        isize::try_from(value).map_err(|_| CodecError::OutOfRange {
            kind: Self::KIND,
            value: value.into(),
        })
    }
}

/// Key encoder signature accepted by [`KeyCodec::custom`].
pub type EncodeKeyFn<K> = fn(&K) -> CodecResult<Vec<u8>>;

/// Key decoder signature accepted by [`KeyCodec::custom`].
pub type DecodeKeyFn<K> = fn(&[u8]) -> CodecResult<K>;

/// The key codec a [`TypedStore`](crate::TypedStore) is built with.
///
/// Chosen once at construction and never inspected again per call. Use
/// [`KeyCodec::native`] for any [`StoreKey`] type. [`KeyCodec::custom`] covers
/// key types that cannot implement [`StoreKey`], e.g. types from another crate.
pub struct KeyCodec<K> {
    kind: KeyKind,
    encode: EncodeKeyFn<K>,
    decode: Option<DecodeKeyFn<K>>,
}

impl<K: StoreKey> KeyCodec<K> {
    pub fn native() -> Self {
        Self {
            kind: K::KIND,
            encode: K::encode_key,
            decode: Some(K::decode_key),
        }
    }
}

impl<K> KeyCodec<K> {
    pub fn custom(encode: EncodeKeyFn<K>, decode: DecodeKeyFn<K>) -> Self {
        Self {
            kind: KeyKind::Custom,
            encode,
            decode: Some(decode),
        }
    }

    /// A codec that can only write keys.
    ///
    /// Point operations work; anything that has to turn stored bytes back
    /// into `K` (range scans) fails with [`CodecError::Unimplemented`].
    pub fn encode_only(encode: EncodeKeyFn<K>) -> Self {
        Self {
            kind: KeyKind::Custom,
            encode,
            decode: None,
        }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn encode(&self, key: &K) -> CodecResult<Vec<u8>> {
        (self.encode)(key)
    }

    pub fn decode(&self, buf: &[u8]) -> CodecResult<K> {
        match self.decode {
            Some(decode) => decode(buf),
            None => Err(CodecError::Unimplemented {
                kind: self.kind,
                operation: "decode",
            }),
        }
    }
}

impl<K> Clone for KeyCodec<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for KeyCodec<K> {}

impl<K> fmt::Debug for KeyCodec<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyCodec")
            .field("kind", &self.kind)
            .field("decodable", &self.decode.is_some())
            .finish()
    }
}
