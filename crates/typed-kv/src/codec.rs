use std::{error::Error as StdError, str::Utf8Error};

use thiserror::Error;

use crate::key::KeyKind;

/// Boxed error produced by a value's own serialization contract.
pub type BoxedCodecSource = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum CodecError {
    /// Unable to decode a fixed-width key because the input has a different
    /// length than the encoding width.
    #[error("incorrect size for {kind} key: expected {expected} bytes, got {actual}")]
    IncorrectSize {
        kind: KeyKind,
        expected: usize,
        actual: usize,
    },

    /// The key codec was configured without the requested direction.
    #[error("{operation} is not implemented for {kind} key")]
    Unimplemented {
        kind: KeyKind,
        operation: &'static str,
    },

    /// Text key bytes are not valid UTF-8.
    #[error("text key is not valid utf-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// Decoded integer does not fit the platform-sized target type.
    #[error("{kind} key value {value} does not fit the target integer type")]
    OutOfRange { kind: KeyKind, value: i128 },

    /// Value serialization failed.
    #[error("failed to serialize value: {source}")]
    SerializationFailed {
        #[source]
        source: BoxedCodecSource,
    },

    /// Value deserialization failed.
    #[error("failed to deserialize value: {source}")]
    DeserializationFailed {
        #[source]
        source: BoxedCodecSource,
    },
}

impl CodecError {
    /// Wraps an arbitrary serializer failure.
    pub fn serialization(source: impl Into<BoxedCodecSource>) -> Self {
        Self::SerializationFailed {
            source: source.into(),
        }
    }

    /// Wraps an arbitrary deserializer failure.
    pub fn deserialization(source: impl Into<BoxedCodecSource>) -> Self {
        Self::DeserializationFailed {
            source: source.into(),
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Serialization contract every stored value type provides.
///
/// The store never looks inside the produced bytes, it only hands them back
/// to [`ValueCodec::decode_value`] on reads. Implementations must round-trip
/// exactly. For borsh-derived types, [`borsh_value_codec!`](crate::borsh_value_codec)
/// writes the impl.
pub trait ValueCodec: Sized {
    fn encode_value(&self) -> CodecResult<Vec<u8>>;
    fn decode_value(buf: &[u8]) -> CodecResult<Self>;
}
