//! Redemption results
//!
//! A rejected key is a normal result, not an error.

use serde::{Deserialize, Serialize};

/// Which branch a validation took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// The key was active and is now used
    Activated,
    /// The key was redeemed before
    AlreadyUsed,
    /// The key was never issued
    InvalidKey,
}

impl ValidationStatus {
    /// Human-readable reason reported to the caller
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Activated => "activated successfully",
            Self::AlreadyUsed => "already used",
            Self::InvalidKey => "invalid key",
        }
    }

    /// Whether the key was accepted
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Activated)
    }
}

/// Result of [`KeyStore::validate`](crate::KeyStore::validate)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the key was accepted
    pub valid: bool,
    /// Human-readable reason
    pub message: String,
}

impl ValidationOutcome {
    /// Status this outcome was built from, if the message is one the store emits
    #[must_use]
    pub fn status(&self) -> Option<ValidationStatus> {
        [
            ValidationStatus::Activated,
            ValidationStatus::AlreadyUsed,
            ValidationStatus::InvalidKey,
        ]
        .into_iter()
        .find(|status| status.is_valid() == self.valid && status.message() == self.message)
    }
}

impl From<ValidationStatus> for ValidationOutcome {
    fn from(status: ValidationStatus) -> Self {
        Self {
            valid: status.is_valid(),
            message: status.message().to_string(),
        }
    }
}
