//! Error handling for the key store
//!
//! Read failures on the key record are not represented here: they are
//! recovered inside [`KeyStore::load`](crate::KeyStore::load) and never reach
//! the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Key store errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// The key record could not be written
    #[error("Failed to write key record {}: {source}", path.display())]
    StorageWrite {
        /// Record (or temporary file) being written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The key record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store lock could not be acquired
    #[error("Failed to lock key store {}: {source}", path.display())]
    Lock {
        /// Lock file path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Every candidate for a new key collided with an existing key
    #[error("Key generation exhausted after {attempts} colliding candidates")]
    GenerationExhausted {
        /// Number of candidates tried for the key
        attempts: u32,
    },

    /// `create` was asked for more keys than one batch may hold
    #[error("Requested {requested} keys, at most {limit} may be issued at once")]
    BatchTooLarge {
        /// Number of keys asked for
        requested: usize,
        /// Configured batch limit
        limit: usize,
    },

    /// A generator produced a key outside the 16 uppercase letter format
    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// The store configuration is unusable
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl KeyError {
    pub(crate) fn storage_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from the file system rather than from the keys themselves
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::StorageWrite { .. } | Self::Lock { .. })
    }
}

/// Result type for key store operations
pub type Result<T> = std::result::Result<T, KeyError>;
