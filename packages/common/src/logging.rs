//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with secure handling of access keys
//! and proper integration with the standard log crate.

use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use std::path::Path;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=keygate_key=debug` - Module-specific levels
    ///
    /// Without `RUST_LOG` only warnings and errors are shown, so the
    /// interactive front end stays readable.
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .format_timestamp_micros()
                .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a key store operation touching a single access key
    ///
    /// The key itself is hashed with SHA-256 so logs never carry redeemable keys.
    pub fn log_key_operation(operation: &str, key: &str, success: bool) {
        let key_hash = Self::secure_hash_key(key);
        if success {
            info!("Key operation succeeded: {operation} (key_hash: {key_hash})");
        } else {
            warn!("Key operation failed: {operation} (key_hash: {key_hash})");
        }
    }

    /// Log a batch of freshly issued keys
    pub fn log_batch_created(count: usize, active_total: usize) {
        info!("Issued {count} access key(s) (active total: {active_total})");
    }

    /// Log a storage read that was recovered to an empty record
    pub fn log_storage_recovery(path: &Path, reason: &dyn std::fmt::Display) {
        warn!(
            "Key record at {} could not be loaded, continuing with an empty record: {reason}",
            path.display()
        );
    }

    /// Log a store lock file that could not be created
    ///
    /// The operation continues without cross-process serialisation.
    pub fn log_lock_unavailable(path: &Path, reason: &dyn std::fmt::Display) {
        warn!(
            "Key store lock {} unavailable, continuing unlocked: {reason}",
            path.display()
        );
    }

    /// Log an operator command the store rejected or could not complete
    ///
    /// Successful commands are already logged by the store operations.
    pub fn log_command_failure(command: &str, reason: &dyn std::fmt::Display) {
        warn!("Command failed: {command}: {reason}");
    }

    /// Cryptographically secure key hashing for logging
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256 digest.
    pub fn secure_hash_key(key: &str) -> String {
        let hash = Sha256::digest(key.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_key_hashing() {
        LoggingTransformer::init_test();

        let key1 = "ABCDEFGHIJKLMNOP";
        let key2 = "QRSTUVWXYZABCDEF";

        let hash1 = LoggingTransformer::secure_hash_key(key1);
        let hash2 = LoggingTransformer::secure_hash_key(key2);

        assert_ne!(hash1, hash2);
        assert_eq!(hash1, LoggingTransformer::secure_hash_key(key1));

        // '#' plus 12 hex chars
        assert!(hash1.starts_with('#'));
        assert_eq!(hash1.len(), 13);
        assert!(!hash1.contains(key1));
    }

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();

        LoggingTransformer::log_key_operation("validate", "ABCDEFGHIJKLMNOP", true);
        LoggingTransformer::log_key_operation("validate", "NOTREALKEY123456", false);
        LoggingTransformer::log_batch_created(3, 10);
        LoggingTransformer::log_storage_recovery(Path::new("access_keys.json"), &"bad json");
        LoggingTransformer::log_lock_unavailable(Path::new("access_keys.json.lock"), &"read-only");
        LoggingTransformer::log_command_failure("create", &"batch too large");
    }
}
