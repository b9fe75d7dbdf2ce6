//! Key store configuration

use crate::{KeyError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name of the key record when no location is configured
pub const DEFAULT_STORE_FILE: &str = "access_keys.json";

/// Where the key record lives and how `create` is bounded
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStoreConfig {
    /// Location of the key record
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Candidates tried per key before `create` gives up
    #[serde(default = "default_max_generation_attempts")]
    pub max_generation_attempts: u32,
    /// Most keys a single `create` call may issue
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
}

fn default_store_path() -> PathBuf {
    // Resolved once, against the working directory at construction time
    match std::env::current_dir() {
        Ok(dir) => dir.join(DEFAULT_STORE_FILE),
        Err(_) => PathBuf::from(DEFAULT_STORE_FILE),
    }
}

fn default_max_generation_attempts() -> u32 {
    32
}

fn default_max_batch_size() -> usize {
    10_000
}

impl Default for KeyStoreConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            max_generation_attempts: default_max_generation_attempts(),
            max_batch_size: default_max_batch_size(),
        }
    }
}

impl KeyStoreConfig {
    /// Configuration for a record at `store_path` with default limits
    pub fn at<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            store_path: store_path.as_ref().to_path_buf(),
            max_generation_attempts: default_max_generation_attempts(),
            max_batch_size: default_max_batch_size(),
        }
    }

    /// Read a JSON configuration document
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Configuration`] if the file cannot be read, is not
    /// valid JSON, or carries unusable values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            KeyError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            KeyError::Configuration(format!("cannot parse {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the record location
    #[must_use]
    pub fn with_store_path<P: AsRef<Path>>(mut self, store_path: P) -> Self {
        self.store_path = store_path.as_ref().to_path_buf();
        self
    }

    /// Replace the per-key candidate limit, never below one
    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts.max(1);
        self
    }

    /// Replace the per-call batch limit, never below one
    #[must_use]
    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size.max(1);
        self
    }

    /// Check the values are usable
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Configuration`] for an empty store path or a zero
    /// limit.
    pub fn validate(&self) -> Result<()> {
        if self.store_path.as_os_str().is_empty() {
            return Err(KeyError::Configuration(
                "store_path must not be empty".to_string(),
            ));
        }
        if self.max_generation_attempts == 0 {
            return Err(KeyError::Configuration(
                "max_generation_attempts must be at least 1".to_string(),
            ));
        }
        if self.max_batch_size == 0 {
            return Err(KeyError::Configuration(
                "max_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the advisory lock file guarding the record
    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        let mut name = OsString::from(self.store_path.as_os_str());
        name.push(".lock");
        PathBuf::from(name)
    }
}
