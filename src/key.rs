//! Credential key types

use crate::error::{CredentialError, Result};
use serde::{Deserialize, Serialize};

/// Identifies a single stored credential: a username under a service name
///
/// Both fields are required; operations reject a key with an empty field
/// before touching the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialKey {
    /// Account/username
    pub username: String,
    /// Service name (e.g., "mail")
    pub service: String,
}

impl CredentialKey {
    /// Create a new credential key
    #[must_use]
    pub fn new(username: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            service: service.into(),
        }
    }

    /// Check that both fields are present
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(CredentialError::InvalidArgument("username"));
        }
        if self.service.is_empty() {
            return Err(CredentialError::InvalidArgument("service"));
        }
        Ok(())
    }

    /// Generate the vault entry key
    #[must_use]
    pub fn entry_key(&self) -> String {
        format!("{}:{}", self.service, self.username)
    }
}

impl std::fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.service, self.username)
    }
}
