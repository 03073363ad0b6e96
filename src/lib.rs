//! Credkeeper - Credential reconciliation over an external secret vault
//!
//! This crate stores, retrieves, and deletes a single username/password
//! credential through an external vault (OS keychain or equivalent), and
//! reconciles the three states a record can be observed in:
//! - **Absent**: no record matches the key
//! - **Malformed**: attributes match but the password payload is missing or
//!   undecodable (a legacy defect state)
//! - **Valid**: attributes and payload both present
//!
//! Malformed records are surfaced distinctly on read so callers can prompt
//! for re-entry, and are deleted and recreated transparently on the next
//! store.
//!
//! ## Security Features
//!
//! - **SecureString**: Uses `zeroize` crate for cryptographic memory wiping
//! - **Constant-time comparison**: Password equality checks never leak timing
//! - **Debug Safety**: Sensitive values are redacted in Debug output
//!
//! The vault itself (encryption, access control, persistence) is entirely
//! external; this crate only orchestrates the query/update/delete calls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod key;
#[cfg(target_os = "macos")]
mod keychain;
mod memory;
mod reconciler;
mod secure_string;
mod vault;


// Re-export all public types
pub use error::{CredentialError, Result};
pub use key::CredentialKey;
#[cfg(target_os = "macos")]
pub use keychain::KeychainVault;
pub use memory::MemoryVault;
pub use reconciler::{CredentialReconciler, Lookup};
pub use secure_string::SecureString;
pub use vault::{SecretVault, VaultAttributes, VaultFailure, VaultResult};
