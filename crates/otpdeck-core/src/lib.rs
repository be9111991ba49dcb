//! Core otpdeck library (credential records, vault, config).

pub mod config;
pub mod credential;
pub mod vault;

pub use credential::{Credential, CredentialDraft, CredentialId};
pub use vault::{CredentialStore, Vault, VaultSnapshot};
