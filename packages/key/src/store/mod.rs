//! File-backed key store
//!
//! The store holds no record between calls. Each operation takes the store
//! lock, loads the record from disk, mutates it, writes it back, and
//! releases the lock.

mod lifecycle;
mod lock;
mod persistence;

use crate::config::KeyStoreConfig;
use crate::generator::{KeyGenerator, SecureKeyGenerator};
use crate::Result;
use std::path::Path;

/// Issues, lists, and redeems access keys kept in one JSON record
#[derive(Clone, Debug)]
pub struct KeyStore<G = SecureKeyGenerator> {
    config: KeyStoreConfig,
    generator: G,
}

impl KeyStore {
    /// Create a store with the secure generator
    ///
    /// The configuration is taken as is; use [`KeyStore::try_new`] to reject
    /// unusable values up front. A zero `max_generation_attempts` behaves as
    /// one attempt.
    #[must_use]
    pub fn new(config: KeyStoreConfig) -> Self {
        Self::with_generator(config, SecureKeyGenerator)
    }

    /// Create a store after checking the configuration
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Configuration`](crate::KeyError::Configuration) if
    /// the configuration is unusable.
    pub fn try_new(config: KeyStoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a store for the record at `store_path` with default limits
    pub fn open<P: AsRef<Path>>(store_path: P) -> Self {
        Self::new(KeyStoreConfig::at(store_path))
    }
}

impl<G: KeyGenerator> KeyStore<G> {
    /// Create a store drawing candidate keys from `generator`
    pub fn with_generator(config: KeyStoreConfig, generator: G) -> Self {
        Self { config, generator }
    }

    /// Configuration this store was built with
    #[must_use]
    pub fn config(&self) -> &KeyStoreConfig {
        &self.config
    }

    /// Location of the key record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.store_path
    }
}
