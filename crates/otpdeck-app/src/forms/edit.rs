//! Existing-credential edit form.

use otpdeck_core::{Credential, CredentialDraft};

use crate::actions::{Action, ActionSender};

/// Draft state for editing a stored credential.
///
/// Wraps the record being edited; submitting replaces that record in place.
#[derive(Debug, Clone)]
pub struct EditForm {
    draft: CredentialDraft,
    credential: Credential,
    actions: ActionSender,
}

impl EditForm {
    /// Creates a form prefilled from `credential`.
    pub(crate) fn new(credential: Credential, actions: ActionSender) -> Self {
        Self {
            draft: CredentialDraft::new(
                credential.issuer.clone(),
                credential.account.clone(),
                credential.secret.clone(),
            ),
            credential,
            actions,
        }
    }

    pub fn draft(&self) -> &CredentialDraft {
        &self.draft
    }

    /// The record this form is editing.
    pub fn credential(&self) -> &Credential {
        &self.credential
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

    /// Submits the draft as an in-place replacement for the wrapped record.
    pub fn submit(&self) {
        let _ = self.actions.send(Action::SaveChanges {
            replacement: self.draft.clone(),
            existing: self.credential.clone(),
        });
    }

    /// Abandons the edit flow.
    pub fn cancel(&self) {
        let _ = self.actions.send(Action::CancelEdit);
    }
}
