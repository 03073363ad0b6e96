//! Credential error types

use crate::vault::VaultFailure;
use thiserror::Error;

/// Errors returned by credential operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// A required field was empty or missing; caller bug, never retried
    #[error("Invalid argument: {0} must not be empty")]
    InvalidArgument(&'static str),

    /// The vault reported a failure; the original status is preserved
    #[error("Vault error: {0}")]
    Vault(#[from] VaultFailure),
}

/// Result type for credential operations
pub type Result<T> = std::result::Result<T, CredentialError>;
