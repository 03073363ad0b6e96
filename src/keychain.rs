//! macOS Keychain vault adapter
//!
//! Drives the `security(1)` command-line tool. `find-generic-password`
//! without `-w` matches on attributes only; with `-w` it requests the
//! password payload — which is exactly the attribute/payload query split the
//! vault contract needs to tell an absent record from a malformed one.

use crate::key::CredentialKey;
use crate::vault::{SecretVault, VaultAttributes, VaultFailure, VaultResult};
use std::process::{Command, Output};
use tracing::warn;

/// [`SecretVault`] backed by the macOS Keychain
pub struct KeychainVault;

impl KeychainVault {
    /// Create a keychain-backed vault
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn run(args: &[&str]) -> VaultResult<Output> {
        Command::new("security").args(args).output().map_err(|e| {
            warn!(error = %e, "Failed to run security tool");
            VaultFailure::Status(-1)
        })
    }

    fn failure_from(output: &Output) -> VaultFailure {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("could not be found") {
            VaultFailure::NoMatch
        } else {
            VaultFailure::Status(output.status.code().unwrap_or(-1))
        }
    }
}

impl Default for KeychainVault {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretVault for KeychainVault {
    fn query_attributes(&self, key: &CredentialKey) -> VaultResult<VaultAttributes> {
        let output = Self::run(&[
            "find-generic-password",
            "-s",
            &key.service,
            "-a",
            &key.username,
        ])?;

        if output.status.success() {
            Ok(VaultAttributes::for_key(key))
        } else {
            Err(Self::failure_from(&output))
        }
    }

    fn query_payload(&self, key: &CredentialKey) -> VaultResult<Vec<u8>> {
        let output = Self::run(&[
            "find-generic-password",
            "-s",
            &key.service,
            "-a",
            &key.username,
            "-w", // Print password only
        ])?;

        if !output.status.success() {
            return Err(Self::failure_from(&output));
        }

        let mut bytes = output.stdout;
        while matches!(bytes.last(), Some(&b'\n') | Some(&b'\r')) {
            bytes.pop();
        }
        Ok(bytes)
    }

    fn insert(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        let password = String::from_utf8_lossy(payload);
        let output = Self::run(&[
            "add-generic-password",
            "-s",
            &key.service,
            "-a",
            &key.username,
            "-w",
            &password,
        ])?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Self::failure_from(&output))
        }
    }

    fn update(&self, key: &CredentialKey, payload: &[u8]) -> VaultResult<()> {
        let password = String::from_utf8_lossy(payload);
        let output = Self::run(&[
            "add-generic-password",
            "-U", // Update if exists
            "-s",
            &key.service,
            "-a",
            &key.username,
            "-w",
            &password,
        ])?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Self::failure_from(&output))
        }
    }

    fn delete(&self, key: &CredentialKey) -> VaultResult<()> {
        let output = Self::run(&[
            "delete-generic-password",
            "-s",
            &key.service,
            "-a",
            &key.username,
        ])?;

        if output.status.success() {
            Ok(())
        } else {
            Err(Self::failure_from(&output))
        }
    }
}
