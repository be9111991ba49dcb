//! Credential records and drafts.
//!
//! A `Credential` is a persisted record in the vault. A `CredentialDraft`
//! carries only the user-supplied fields; the vault assigns the derived
//! fields (id, creation time) on append. OTP code generation from the
//! stored secret is not this crate's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a stored credential.
///
/// Assigned by the vault on append and preserved across in-place updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialId(Uuid);

impl CredentialId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CredentialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored secret/account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Vault-assigned identity, stable across edits.
    pub id: CredentialId,
    /// Issuing service ("GitHub", "Fastmail", ...).
    pub issuer: String,
    /// Account label within the issuer (usually an email or username).
    pub account: String,
    /// Shared secret the OTP generator consumes. Opaque here.
    pub secret: String,
    /// When the record was first appended to the vault.
    pub created_at: DateTime<Utc>,
}

impl Credential {
    /// Human-readable label for list views.
    pub fn label(&self) -> String {
        if self.account.is_empty() {
            self.issuer.clone()
        } else {
            format!("{} ({})", self.issuer, self.account)
        }
    }
}

/// User-supplied fields of a credential, before the vault owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDraft {
    pub issuer: String,
    pub account: String,
    pub secret: String,
}

impl CredentialDraft {
    pub fn new(
        issuer: impl Into<String>,
        account: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            account: account.into(),
            secret: secret.into(),
        }
    }

    /// Returns true when no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        self.issuer.is_empty() && self.account.is_empty() && self.secret.is_empty()
    }
}
