//! New-credential entry form.

use otpdeck_core::CredentialDraft;

use crate::actions::{Action, ActionSender};

/// Draft state for adding a credential manually.
#[derive(Debug, Clone)]
pub struct EntryForm {
    draft: CredentialDraft,
    actions: ActionSender,
}

impl EntryForm {
    /// Creates an empty form bound to the coordinator's action queue.
    pub(crate) fn new(actions: ActionSender) -> Self {
        Self {
            draft: CredentialDraft::default(),
            actions,
        }
    }

    pub fn draft(&self) -> &CredentialDraft {
        &self.draft
    }

    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.draft.issuer = issuer.into();
    }

    pub fn set_account(&mut self, account: impl Into<String>) {
        self.draft.account = account.into();
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.draft.secret = secret.into();
    }

    /// Submits the draft as a new credential.
    pub fn submit(&self) {
        let _ = self
            .actions
            .send(Action::SaveNewCredential(self.draft.clone()));
    }

    /// Abandons the entry flow.
    pub fn cancel(&self) {
        let _ = self.actions.send(Action::CancelEntry);
    }
}
