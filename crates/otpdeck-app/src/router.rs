//! Action router: the single authority over the modal context.
//!
//! All action dispatch happens here. The router owns the `ModalContext`,
//! is its only mutator, and couples every write to exactly one presentation
//! effect. `handle` runs to completion synchronously — the effect has fired
//! before it returns — and is never re-entered (action delivery is
//! serialized by the host through the action queue).

use otpdeck_core::{CredentialStore, VaultSnapshot};

use crate::actions::{Action, ActionSender};
use crate::forms::{EditForm, EntryForm};
use crate::modal::ModalContext;
use crate::scanner::ScannerCapability;
use crate::sink::{PresentationSink, ScannerScreen, Screen};

/// Routes user actions into state transitions and presentation effects.
///
/// Constructed per host window with injected collaborators; independent
/// instances are cheap, which is how the tests drive it.
pub struct ActionRouter<V, S, C> {
    store: V,
    sink: S,
    scanner: C,
    modal: ModalContext,
    actions: ActionSender,
}

impl<V, S, C> ActionRouter<V, S, C>
where
    V: CredentialStore,
    S: PresentationSink,
    C: ScannerCapability,
{
    /// Creates a router with no overlay shown.
    ///
    /// `actions` must be the sender side of the queue the host drains into
    /// `handle`; forms and screens created here report back through it.
    pub fn new(store: V, sink: S, scanner: C, actions: ActionSender) -> Self {
        Self {
            store,
            sink,
            scanner,
            modal: ModalContext::None,
            actions,
        }
    }

    /// The current modal context.
    pub fn modal(&self) -> &ModalContext {
        &self.modal
    }

    /// Read-only projection of the credential store for rendering.
    pub fn snapshot(&self) -> VaultSnapshot {
        self.store.snapshot()
    }

    /// Dispatches one action, synchronously, effects included.
    ///
    /// No action fails. Vault mutations happen strictly before the modal
    /// transition, so the dismiss effect observes the updated collection.
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::BeginEntry => {
                if !self.modal.is_none() {
                    tracing::warn!(
                        modal = self.modal.label(),
                        "BeginEntry ignored while an overlay is active"
                    );
                    return;
                }
                if self.scanner.is_available() {
                    self.set_modal(ModalContext::EntryScanner);
                } else {
                    let form = EntryForm::new(self.actions.clone());
                    self.set_modal(ModalContext::EntryForm(form));
                }
            }

            Action::SaveNewCredential(draft) => {
                if !matches!(
                    self.modal,
                    ModalContext::EntryScanner | ModalContext::EntryForm(_)
                ) {
                    tracing::warn!(
                        modal = self.modal.label(),
                        "SaveNewCredential outside an entry flow"
                    );
                }
                self.store.append(draft);
                self.set_modal(ModalContext::None);
            }

            Action::CancelEntry => {
                self.set_modal(ModalContext::None);
            }

            Action::BeginEdit(credential) => {
                if !self.modal.is_none() {
                    tracing::warn!(
                        modal = self.modal.label(),
                        "BeginEdit ignored while an overlay is active"
                    );
                    return;
                }
                let form = EditForm::new(credential, self.actions.clone());
                self.set_modal(ModalContext::EditForm(form));
            }

            Action::SaveChanges {
                replacement,
                existing,
            } => {
                if !matches!(self.modal, ModalContext::EditForm(_)) {
                    tracing::warn!(
                        modal = self.modal.label(),
                        "SaveChanges outside an edit flow"
                    );
                }
                self.store.replace(&existing.id, replacement);
                self.set_modal(ModalContext::None);
            }

            Action::CancelEdit => {
                self.set_modal(ModalContext::None);
            }
        }
    }

    /// Stores the new modal context and fires exactly one presentation
    /// effect chosen by it.
    ///
    /// Every write fires, including a write of the current variant — hosts
    /// rely on the dismiss being idempotent.
    fn set_modal(&mut self, next: ModalContext) {
        tracing::debug!(modal = next.label(), "modal context set");
        self.modal = next;
        let screen = match &self.modal {
            ModalContext::None => None,
            ModalContext::EntryScanner => Some(Screen::Scanner(ScannerScreen::new(
                self.actions.clone(),
            ))),
            ModalContext::EntryForm(form) => Some(Screen::EntryForm(form.clone())),
            ModalContext::EditForm(form) => Some(Screen::EditForm(form.clone())),
        };
        match screen {
            Some(screen) => self.sink.present(screen),
            None => self.sink.dismiss(),
        }
    }
}
