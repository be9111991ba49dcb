//! In-memory credential collection.
//!
//! The vault is an ordered list: insertion order is display order and stays
//! stable across edits. `CredentialStore` is the contract the coordinator
//! depends on, so tests can substitute a recording double and a future host
//! can back it with real persistence without touching the core.

use serde::Serialize;

use crate::credential::{Credential, CredentialDraft, CredentialId};

/// Read-only projection of the vault for rendering.
///
/// Assembled on demand; reflects store state at call time and carries no
/// behavioral contract beyond that.
#[derive(Debug, Clone, Serialize)]
pub struct VaultSnapshot {
    pub credentials: Vec<Credential>,
}

/// Contract between the coordinator and the credential collection.
///
/// The collection assigns derived fields on append; replace is an in-place
/// update that preserves the record's position and identity.
pub trait CredentialStore {
    /// Appends a new record built from `draft`, assigning id and timestamps.
    fn append(&mut self, draft: CredentialDraft) -> Credential;

    /// Replaces the record identified by `existing` with `draft`, keeping
    /// its position and id. Returns false if no such record exists.
    fn replace(&mut self, existing: &CredentialId, draft: CredentialDraft) -> bool;

    /// Snapshot of the current contents, in display order.
    fn snapshot(&self) -> VaultSnapshot;
}

/// Ordered in-memory credential store.
#[derive(Debug, Default)]
pub struct Vault {
    credentials: Vec<Credential>,
}

impl Vault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Returns the record at `index` in display order.
    pub fn get(&self, index: usize) -> Option<&Credential> {
        self.credentials.get(index)
    }
}

impl CredentialStore for Vault {
    fn append(&mut self, draft: CredentialDraft) -> Credential {
        let credential = Credential {
            id: CredentialId::new(),
            issuer: draft.issuer,
            account: draft.account,
            secret: draft.secret,
            created_at: chrono::Utc::now(),
        };
        self.credentials.push(credential.clone());
        credential
    }

    fn replace(&mut self, existing: &CredentialId, draft: CredentialDraft) -> bool {
        let Some(slot) = self.credentials.iter_mut().find(|c| c.id == *existing) else {
            tracing::warn!(id = %existing, "replace for unknown credential ignored");
            return false;
        };
        slot.issuer = draft.issuer;
        slot.account = draft.account;
        slot.secret = draft.secret;
        true
    }

    fn snapshot(&self) -> VaultSnapshot {
        VaultSnapshot {
            credentials: self.credentials.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(issuer: &str) -> CredentialDraft {
        CredentialDraft::new(issuer, "me@example.com", "JBSWY3DP")
    }

    #[test]
    fn test_append_assigns_distinct_ids_and_keeps_order() {
        let mut vault = Vault::new();
        let a = vault.append(draft("Alpha"));
        let b = vault.append(draft("Beta"));

        assert_ne!(a.id, b.id);
        let snapshot = vault.snapshot();
        assert_eq!(snapshot.credentials.len(), 2);
        assert_eq!(snapshot.credentials[0].issuer, "Alpha");
        assert_eq!(snapshot.credentials[1].issuer, "Beta");
    }

    #[test]
    fn test_replace_preserves_position_and_id() {
        let mut vault = Vault::new();
        vault.append(draft("Alpha"));
        let target = vault.append(draft("Beta"));
        vault.append(draft("Gamma"));

        assert!(vault.replace(&target.id, draft("Beta Prime")));

        let snapshot = vault.snapshot();
        assert_eq!(snapshot.credentials[1].issuer, "Beta Prime");
        assert_eq!(snapshot.credentials[1].id, target.id);
        // Neighbors untouched.
        assert_eq!(snapshot.credentials[0].issuer, "Alpha");
        assert_eq!(snapshot.credentials[2].issuer, "Gamma");
        // The old field values are gone.
        assert!(snapshot.credentials.iter().all(|c| c.issuer != "Beta"));
    }

    #[test]
    fn test_replace_unknown_id_is_a_no_op() {
        let mut vault = Vault::new();
        let appended = vault.append(draft("Alpha"));
        let mut other = Vault::new();
        let foreign = other.append(draft("Elsewhere"));

        assert!(!vault.replace(&foreign.id, draft("Mutated")));
        assert_eq!(vault.snapshot().credentials[0], appended);
    }
}
