//! Reading and writing the key record
//!
//! Reads fail open: a missing record is created empty, an unreadable or
//! malformed one is reported and replaced by an empty record in memory.
//! Writes fail closed and propagate.

use super::lock::StoreLock;
use super::KeyStore;
use crate::generator::KeyGenerator;
use crate::record::KeyRecord;
use crate::{KeyError, Result};
use keygate_common::LoggingTransformer;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl<G: KeyGenerator> KeyStore<G> {
    /// Read the persisted record
    ///
    /// A missing record is created with two empty collections and persisted.
    /// An unreadable or malformed record is logged and an empty record is
    /// returned instead; the file on disk is left alone until the next save.
    ///
    /// When the lock file cannot be created the record is still read, without
    /// the lock.
    ///
    /// # Errors
    ///
    /// Only a failure to lock an opened lock file and a failed bootstrap
    /// write are returned.
    pub fn load(&self) -> Result<KeyRecord> {
        let _lock = self.lock()?;
        self.load_unlocked()
    }

    /// Replace the persisted record with `record`
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::StorageWrite`] if the record cannot be written and
    /// [`KeyError::Lock`] if the store lock cannot be taken.
    pub fn save(&self, record: &KeyRecord) -> Result<()> {
        let _lock = self.lock()?;
        self.save_unlocked(record)
    }

    pub(super) fn lock(&self) -> Result<StoreLock> {
        StoreLock::acquire(&self.config.lock_path())
    }

    pub(super) fn load_unlocked(&self) -> Result<KeyRecord> {
        let path = &self.config.store_path;

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No key record at {}, creating one", path.display());
                let record = KeyRecord::empty();
                self.save_unlocked(&record)?;
                return Ok(record);
            }
            Err(e) => {
                LoggingTransformer::log_storage_recovery(path, &e);
                return Ok(KeyRecord::empty());
            }
        };

        match serde_json::from_str::<KeyRecord>(&contents) {
            Ok(record) => Ok(record),
            Err(e) => {
                LoggingTransformer::log_storage_recovery(path, &e);
                Ok(KeyRecord::empty())
            }
        }
    }

    pub(super) fn save_unlocked(&self, record: &KeyRecord) -> Result<()> {
        let path = &self.config.store_path;

        let mut contents = serde_json::to_string_pretty(record)?;
        contents.push('\n');

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| KeyError::storage_write(dir, e))?;

        // Atomic write: staged in the same directory, then renamed over the
        // record. The staged file is created owner-only and removed on failure.
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| KeyError::storage_write(dir, e))?;
        staged
            .write_all(contents.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| KeyError::storage_write(staged.path(), e))?;
        staged
            .persist(path)
            .map_err(|e| KeyError::storage_write(path, e.error))?;

        debug!(
            "Saved key record to {} ({} active, {} used)",
            path.display(),
            record.active_count(),
            record.used_count()
        );
        Ok(())
    }
}
