//! Key lifecycle: issue, list, redeem

use super::KeyStore;
use crate::generator::{is_well_formed, KeyGenerator, KEY_LENGTH};
use crate::outcome::{ValidationOutcome, ValidationStatus};
use crate::record::KeyRecord;
use crate::{KeyError, Result};
use keygate_common::LoggingTransformer;
use log::{debug, warn};

impl<G: KeyGenerator> KeyStore<G> {
    /// Issue `count` new keys
    ///
    /// Each key is distinct from every key already in the record and from
    /// the rest of the batch. The whole batch is persisted with a single
    /// write; `count == 0` returns an empty list without touching the store.
    ///
    /// # Errors
    ///
    /// - [`KeyError::BatchTooLarge`] if `count` exceeds the configured
    ///   `max_batch_size`; the store is not touched
    /// - [`KeyError::GenerationExhausted`] if one key kept colliding
    /// - [`KeyError::InvalidKeyFormat`] if the generator produced a malformed key
    /// - storage write or lock failures
    ///
    /// Nothing from the batch is persisted when an error is returned.
    pub fn create(&self, count: usize) -> Result<Vec<String>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let limit = self.config.max_batch_size;
        if count > limit {
            return Err(KeyError::BatchTooLarge {
                requested: count,
                limit,
            });
        }

        let _lock = self.lock()?;
        let mut record = self.load_unlocked()?;

        let mut created = Vec::new();
        for _ in 0..count {
            let key = self.mint_unique(&record)?;
            record.active.push(key.clone());
            created.push(key);
        }

        self.save_unlocked(&record)?;
        LoggingTransformer::log_batch_created(created.len(), record.active_count());
        Ok(created)
    }

    /// Redeem `key`
    ///
    /// Checks run in order: already used, then active, then unknown. Only a
    /// successful redemption writes to the store. Keys are compared exactly.
    ///
    /// # Errors
    ///
    /// Only storage write or lock failures; a rejected key is an `Ok` outcome.
    pub fn validate(&self, key: &str) -> Result<ValidationOutcome> {
        let _lock = self.lock()?;
        let mut record = self.load_unlocked()?;

        let status = if record.is_used(key) {
            ValidationStatus::AlreadyUsed
        } else if record.redeem(key) {
            self.save_unlocked(&record)?;
            ValidationStatus::Activated
        } else {
            ValidationStatus::InvalidKey
        };

        LoggingTransformer::log_key_operation("validate", key, status.is_valid());
        Ok(status.into())
    }

    /// Current record, unchanged
    ///
    /// # Errors
    ///
    /// Same as [`KeyStore::load`].
    pub fn list(&self) -> Result<KeyRecord> {
        self.load()
    }

    fn mint_unique(&self, record: &KeyRecord) -> Result<String> {
        // A zero limit set directly on the config still tries one candidate
        let limit = self.config.max_generation_attempts.max(1);

        for attempt in 1..=limit {
            let candidate = self.generator.generate();
            if !is_well_formed(&candidate) {
                return Err(KeyError::InvalidKeyFormat(format!(
                    "expected {KEY_LENGTH} uppercase letters, generator produced {} characters",
                    candidate.chars().count()
                )));
            }
            if !record.contains(&candidate) {
                if attempt > 1 {
                    debug!("Unique key found after {attempt} candidates");
                }
                return Ok(candidate);
            }
            warn!("Generated key collided with an existing key (candidate {attempt} of {limit})");
        }

        Err(KeyError::GenerationExhausted { attempts: limit })
    }
}
