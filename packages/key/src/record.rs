//! The persisted key record

use serde::{Deserialize, Serialize};

/// Both key collections as stored on disk
///
/// The vectors keep insertion order for readability of the file; membership
/// is what matters. `active` and `used` never share a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    /// Issued keys that have not been redeemed yet
    pub active: Vec<String>,
    /// Keys that have been redeemed
    pub used: Vec<String>,
}

impl KeyRecord {
    /// A record with no keys in either collection
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `key` has ever been issued
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.is_active(key) || self.is_used(key)
    }

    /// Whether `key` is issued and still redeemable
    #[must_use]
    pub fn is_active(&self, key: &str) -> bool {
        self.active.iter().any(|k| k == key)
    }

    /// Whether `key` has already been redeemed
    #[must_use]
    pub fn is_used(&self, key: &str) -> bool {
        self.used.iter().any(|k| k == key)
    }

    /// Number of redeemable keys
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of redeemed keys
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Check that no key appears in both collections
    #[must_use]
    pub fn is_disjoint(&self) -> bool {
        !self.active.iter().any(|k| self.is_used(k))
    }

    /// Move `key` from `active` to `used`
    ///
    /// Returns `false` and leaves the record untouched when the key is not
    /// active or is already used. Every copy of the key leaves `active`, so a
    /// hand-edited record with duplicates stays disjoint.
    pub fn redeem(&mut self, key: &str) -> bool {
        if self.is_used(key) || !self.is_active(key) {
            return false;
        }
        self.active.retain(|k| k != key);
        self.used.push(key.to_string());
        true
    }
}
