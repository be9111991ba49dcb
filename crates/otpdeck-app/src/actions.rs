//! User-intent actions and the queue that serializes their delivery.
//!
//! Every mutation in the coordinator starts as an `Action`. Actions are
//! immutable, one-shot values; they carry no identity beyond their payload.
//!
//! ## Inbox pattern
//!
//! Forms and screens never hold a reference to the router. They hold an
//! `ActionSender` clone and send actions into a single-consumer queue; the
//! host loop drains the queue in arrival order and feeds each action to
//! `ActionRouter::handle`. That keeps delivery strictly serialized on one
//! logical thread and breaks the form↔router reference cycle.

use otpdeck_core::{Credential, CredentialDraft};
use tokio::sync::mpsc;

/// A discrete user intent, dispatched through `ActionRouter::handle`.
#[derive(Debug, Clone)]
pub enum Action {
    /// Start adding a credential (scanner if available, manual form if not).
    BeginEntry,
    /// Commit a completed entry draft to the vault.
    SaveNewCredential(CredentialDraft),
    /// Abandon the entry flow.
    CancelEntry,
    /// Start editing an existing vault record.
    BeginEdit(Credential),
    /// Commit an edit: replace `existing` with `replacement` in place.
    SaveChanges {
        replacement: CredentialDraft,
        existing: Credential,
    },
    /// Abandon the edit flow.
    CancelEdit,
}

/// Sending half of the action queue. Cheap to clone; handed to forms and
/// screens as their only capability to reach the router.
pub type ActionSender = mpsc::UnboundedSender<Action>;

/// Receiving half; the host loop is the single consumer.
pub type ActionReceiver = mpsc::UnboundedReceiver<Action>;

/// Creates the action queue for one coordinator instance.
pub fn action_channel() -> (ActionSender, ActionReceiver) {
    mpsc::unbounded_channel()
}
