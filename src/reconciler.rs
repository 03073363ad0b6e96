//! Credential reconciler implementation

use crate::error::{CredentialError, Result};
use crate::key::CredentialKey;
use crate::secure_string::SecureString;
use crate::vault::{SecretVault, VaultFailure};
use tracing::debug;
use zeroize::Zeroize;

/// Outcome of a credential lookup
///
/// `NotFound` and `Malformed` are legitimate results, not errors: callers
/// react to them (typically by prompting for credentials) rather than
/// treating them as failures.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup {
    /// A valid record was found; this is its decoded password
    Password(SecureString),
    /// No record matches the key
    NotFound,
    /// Attributes match the key but the password payload is missing or not
    /// decodable as UTF-8 (a legacy defect state); callers should prompt for
    /// re-entry, and a subsequent store will repair the entry
    Malformed,
}

impl Lookup {
    /// True if this lookup produced a usable password
    #[must_use]
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password(_))
    }
}

/// Stateless facade reconciling credential state with an external vault
///
/// Holds no cache and no persistent state; every operation is a fresh round
/// trip (one to three vault calls). An earlier defective version of this
/// facility stored passwords as a plain attribute instead of payload data,
/// leaving entries whose attributes match but whose password cannot be read.
/// `fetch` reports such entries as [`Lookup::Malformed`] and `store` repairs
/// them by deleting and recreating the record.
///
/// # Concurrency
///
/// Individual vault calls are as atomic as the vault makes them, but the
/// composite `store` sequence (fetch, then delete/insert/update) is not
/// atomic as a whole. Callers issuing `store` and `delete` concurrently for
/// the same key must serialize externally.
pub struct CredentialReconciler<V: SecretVault> {
    vault: V,
}

impl<V: SecretVault> CredentialReconciler<V> {
    /// Create a reconciler over the given vault
    #[must_use]
    pub fn new(vault: V) -> Self {
        Self { vault }
    }

    /// Retrieve the password stored under `key`
    ///
    /// Returns [`Lookup::NotFound`] when no record matches and
    /// [`Lookup::Malformed`] when attributes match but the payload is
    /// missing or undecodable. Any other vault failure is propagated with
    /// its original status code.
    pub fn fetch(&self, key: &CredentialKey) -> Result<Lookup> {
        key.validate()?;

        debug!(key = %key, "Fetching credential");

        match self.vault.query_attributes(key) {
            Ok(_) => {}
            Err(VaultFailure::NoMatch) => return Ok(Lookup::NotFound),
            Err(failure) => return Err(CredentialError::Vault(failure)),
        }

        match self.vault.query_payload(key) {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(password) => Ok(Lookup::Password(SecureString::new(password))),
                Err(err) => {
                    debug!(key = %key, "Payload not decodable as UTF-8, treating as malformed");
                    let mut bytes = err.into_bytes();
                    bytes.zeroize();
                    Ok(Lookup::Malformed)
                }
            },
            Err(VaultFailure::NoMatch) => {
                debug!(key = %key, "Attributes without payload, legacy malformed record");
                Ok(Lookup::Malformed)
            }
            Err(failure) => Err(CredentialError::Vault(failure)),
        }
    }

    /// Store `password` under `key`
    ///
    /// If a valid record already exists with a different password, the update
    /// is applied only when `update_existing` is true; otherwise the call
    /// succeeds without changing the vault. A malformed legacy record is
    /// deleted and recreated with the new password.
    pub fn store(&self, key: &CredentialKey, password: &str, update_existing: bool) -> Result<()> {
        key.validate()?;
        if password.is_empty() {
            return Err(CredentialError::InvalidArgument("password"));
        }

        debug!(key = %key, update_existing, "Storing credential");

        match self.fetch(key)? {
            Lookup::Password(existing) => {
                if existing == password {
                    debug!(key = %key, "Password unchanged, nothing to do");
                    return Ok(());
                }
                if !update_existing {
                    // Existing record wins; the skip is intentionally silent
                    debug!(key = %key, "Existing credential kept, update skipped");
                    return Ok(());
                }
                self.vault.update(key, password.as_bytes())?;
                Ok(())
            }
            Lookup::Malformed => {
                debug!(key = %key, "Repairing malformed record before store");
                self.delete(key)?;
                self.vault.insert(key, password.as_bytes())?;
                Ok(())
            }
            Lookup::NotFound => {
                self.vault.insert(key, password.as_bytes())?;
                Ok(())
            }
        }
    }

    /// Delete the record stored under `key`
    ///
    /// Delete targets an existing record: a vault "no match" is surfaced as a
    /// vault error, not success. Callers must not delete speculatively.
    pub fn delete(&self, key: &CredentialKey) -> Result<()> {
        key.validate()?;

        debug!(key = %key, "Deleting credential");

        self.vault.delete(key).map_err(CredentialError::Vault)
    }
}
