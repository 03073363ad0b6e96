//! Secret vault collaborator contract
//!
//! The vault is the external secure credential store (macOS Keychain,
//! Linux Secret Service, Windows Credential Manager, or an in-memory stand-in
//! for tests). This crate never implements the storage itself; it only issues
//! the five operations below and reconciles what it observes.

use crate::key::CredentialKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a single vault call
///
/// `Status` carries the platform's native diagnostic code verbatim (e.g. an
/// OSStatus); this crate never interprets it. `NoMatch` is the one status the
/// reconciler treats specially, to distinguish absent from malformed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VaultFailure {
    /// No record matched the key
    #[error("no matching record")]
    NoMatch,
    /// Any other vault status, passed through verbatim
    #[error("vault status {0}")]
    Status(i32),
}

/// Result type for vault calls
pub type VaultResult<T> = std::result::Result<T, VaultFailure>;

/// Attributes of a matched vault record
///
/// Opaque to the reconciler: only the presence of attributes matters to it.
/// The echoed key and metadata are surfaced for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultAttributes {
    /// Service name the record is filed under
    pub service: String,
    /// Account/username the record is filed under
    pub username: String,
    /// Backend-specific metadata (creation date, label, ...)
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl VaultAttributes {
    /// Attributes echoing a key, with no metadata
    #[must_use]
    pub fn for_key(key: &CredentialKey) -> Self {
        Self {
            service: key.service.clone(),
            username: key.username.clone(),
            metadata: HashMap::new(),
        }
    }
}

/// The five operations an external credential store must provide
///
/// Each call is assumed atomic on the vault side; this crate composes them
/// without adding any serialization of its own.
pub trait SecretVault {
    /// Look up a record's attributes without requesting its payload
    fn query_attributes(&self, key: &CredentialKey) -> VaultResult<VaultAttributes>;

    /// Look up the password payload associated with the key
    fn query_payload(&self, key: &CredentialKey) -> VaultResult<Vec<u8>>;

    /// Create a new record with the key's attributes and the given payload
    fn insert(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()>;

    /// Replace the payload of an existing record
    fn update(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()>;

    /// Remove the record matching the key
    fn delete(&self, key: &CredentialKey) -> VaultResult<()>;
}

impl<V: SecretVault + ?Sized> SecretVault for &V {
    fn query_attributes(&self, key: &CredentialKey) -> VaultResult<VaultAttributes> {
        (**self).query_attributes(key)
    }

    fn query_payload(&self, key: &CredentialKey) -> VaultResult<Vec<u8>> {
        (**self).query_payload(key)
    }

    fn insert(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        (**self).insert(key, payload)
    }

    fn update(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        (**self).update(key, payload)
    }

    fn delete(&self, key: &CredentialKey) -> VaultResult<()> {
        (**self).delete(key)
    }
}
