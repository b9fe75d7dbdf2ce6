//! # Keygate Access Keys
//!
//! Issues, tracks, and redeems single-use access keys kept in one JSON record.
//!
//! ## Features
//!
//! - **Key Generation**: 16 uppercase letters drawn from a cryptographically secure source
//! - **Key Storage**: one human-readable record holding `active` and `used` keys
//! - **Redemption**: each key moves from `active` to `used` exactly once
//! - **Locking**: every load/mutate/save cycle runs under an exclusive file lock
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keygate_key::KeyStore;
//!
//! # fn main() -> Result<(), keygate_key::KeyError> {
//! let store = KeyStore::open("./access_keys.json");
//!
//! let keys = store.create(3)?;
//! let outcome = store.validate(&keys[0])?;
//! assert!(outcome.valid);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generator;
pub mod outcome;
pub mod record;
pub mod store;

// Re-export core types
pub use config::KeyStoreConfig;
pub use error::{KeyError, Result};
pub use generator::{
    generate_key, is_well_formed, KeyGenerator, SecureKeyGenerator, ALPHABET, KEY_LENGTH,
};
pub use outcome::{ValidationOutcome, ValidationStatus};
pub use record::KeyRecord;
pub use store::KeyStore;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        KeyError, KeyRecord, KeyStore, KeyStoreConfig, Result, ValidationOutcome,
        ValidationStatus,
    };
}
