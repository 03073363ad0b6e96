//! In-memory vault backend (for testing and embedding)

use crate::key::CredentialKey;
use crate::vault::{SecretVault, VaultAttributes, VaultFailure, VaultResult};
use std::collections::HashMap;
use std::sync::RwLock;

struct MemoryEntry {
    attributes: VaultAttributes,
    /// `None` reproduces the legacy defect: attributes without a payload
    payload: Option<Vec<u8>>,
}

/// An in-memory [`SecretVault`]
///
/// Backs tests and embedded use where no platform store is available. Each
/// call takes the lock once, mirroring the per-call atomicity a real vault
/// provides.
#[derive(Default)]
pub struct MemoryVault {
    entries: RwLock<HashMap<String, MemoryEntry>>,
}

impl MemoryVault {
    /// Create an empty in-memory vault
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry with attributes but no payload
    ///
    /// Reproduces the malformed state left behind by the legacy defect, so
    /// the reconciliation path can be exercised without a real platform
    /// store.
    pub fn insert_attributes_only(&self, key: &CredentialKey) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.entry_key(),
            MemoryEntry {
                attributes: VaultAttributes::for_key(key),
                payload: None,
            },
        );
    }

    /// Number of records currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True if the vault holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecretVault for MemoryVault {
    fn query_attributes(&self, key: &CredentialKey) -> VaultResult<VaultAttributes> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&key.entry_key())
            .map(|e| e.attributes.clone())
            .ok_or(VaultFailure::NoMatch)
    }

    fn query_payload(&self, key: &CredentialKey) -> VaultResult<Vec<u8>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&key.entry_key())
            .and_then(|e| e.payload.clone())
            .ok_or(VaultFailure::NoMatch)
    }

    fn insert(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(
            key.entry_key(),
            MemoryEntry {
                attributes: VaultAttributes::for_key(key),
                payload: Some(payload.to_vec()),
            },
        );
        Ok(())
    }

    fn update(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.get_mut(&key.entry_key()) {
            Some(entry) => {
                entry.payload = Some(payload.to_vec());
                Ok(())
            }
            None => Err(VaultFailure::NoMatch),
        }
    }

    fn delete(&self, key: &CredentialKey) -> VaultResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        match entries.remove(&key.entry_key()) {
            Some(_) => Ok(()),
            None => Err(VaultFailure::NoMatch),
        }
    }
}
