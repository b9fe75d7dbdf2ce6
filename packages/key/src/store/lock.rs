//! Advisory lock serialising load/mutate/save cycles
//!
//! The lock lives in a sibling file so that replacing the record by rename
//! does not drop it. When that file cannot be created (read-only directory,
//! name too long for the file system) the store runs unlocked and says so.

use crate::{KeyError, Result};
use keygate_common::LoggingTransformer;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Exclusive lock held until dropped
pub(super) struct StoreLock {
    file: Option<File>,
}

impl StoreLock {
    /// Block until the exclusive lock on `path` is held
    ///
    /// A lock file that cannot be opened yields an unheld lock after a
    /// warning. Only a failure to lock an opened file is an error.
    pub(super) fn acquire(path: &Path) -> Result<Self> {
        let file = match open_lock_file(path) {
            Ok(file) => file,
            Err(e) => {
                LoggingTransformer::log_lock_unavailable(path, &e);
                return Ok(Self { file: None });
            }
        };

        fs2::FileExt::lock_exclusive(&file).map_err(|source| KeyError::Lock {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { file: Some(file) })
    }
}

fn open_lock_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(path)
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Some(file) = &self.file {
            if let Err(e) = fs2::FileExt::unlock(file) {
                log::warn!("Failed to release key store lock: {e}");
            }
        }
    }
}
