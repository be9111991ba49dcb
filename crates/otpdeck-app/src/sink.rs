//! Presentation sink: the seam between the coordinator and whatever
//! actually draws overlays.
//!
//! The coordinator decides *which* screen should be visible; the sink is
//! responsible for showing and hiding it. Calls are fire-and-forget — there
//! is no completion signal, and a failed present/dismiss is unobservable
//! here. The coordinator never presents two screens without an intervening
//! dismiss (every flow passes through `ModalContext::None`).

use otpdeck_core::CredentialDraft;

use crate::actions::{Action, ActionSender};
use crate::forms::{EditForm, EntryForm};

/// A screen object handed to the sink for display.
///
/// Form screens own a clone of the draft state they are bound to; the
/// scanner screen owns only the action capability it reports back through.
#[derive(Debug, Clone)]
pub enum Screen {
    Scanner(ScannerScreen),
    EntryForm(EntryForm),
    EditForm(EditForm),
}

impl Screen {
    /// Title for hosts that render a heading per overlay.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Scanner(_) => "Scan credential",
            Screen::EntryForm(_) => "Add credential",
            Screen::EditForm(_) => "Edit credential",
        }
    }
}

/// Displays one screen modally and removes the current one.
///
/// `dismiss` must be a no-op when nothing is shown.
pub trait PresentationSink {
    fn present(&mut self, screen: Screen);
    fn dismiss(&mut self);
}

/// Scanner overlay handle.
///
/// The scanning hardware lives in the host; this type only routes the
/// scanner's outcome back into the coordinator as actions.
#[derive(Debug, Clone)]
pub struct ScannerScreen {
    actions: ActionSender,
}

impl ScannerScreen {
    pub(crate) fn new(actions: ActionSender) -> Self {
        Self { actions }
    }

    /// Reports a successfully scanned credential.
    pub fn did_scan(&self, draft: CredentialDraft) {
        let _ = self.actions.send(Action::SaveNewCredential(draft));
    }

    /// Reports that the user dismissed the scanner.
    pub fn cancel(&self) {
        let _ = self.actions.send(Action::CancelEntry);
    }
}
