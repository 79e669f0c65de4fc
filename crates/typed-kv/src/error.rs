use std::{io::Error as IoError, result::Result as StdResult};

use sled::Error as SledError;
use toml::de::Error as TomlError;

use crate::CodecError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Point lookup miss.
    #[error("key not found")]
    NotFound,

    /// Codec error
    #[error("Codec Error: {0}")]
    Codec(#[from] CodecError),

    /// Sled database error
    #[error("Database error: {0}")]
    Sled(#[from] SledError),

    /// Filesystem error while preparing the database location.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Malformed store configuration.
    #[error("Config error: {0}")]
    Config(#[from] TomlError),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

pub type Result<T> = StdResult<T, Error>;
