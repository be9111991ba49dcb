//! Modal context: which overlay, if any, is currently shown.

use crate::forms::{EditForm, EntryForm};

/// The single modal slot of the application.
///
/// Exactly one variant is active at a time. Non-`None` variants are only
/// entered from `None`; every flow completes or cancels back to `None`.
/// `None` is the terminal state of each cycle, not of the machine — the
/// coordinator is re-entrant.
#[derive(Debug)]
pub enum ModalContext {
    /// No overlay shown.
    None,
    /// Scanner overlay active. Carries no payload; the scanner screen is
    /// constructed at presentation time.
    EntryScanner,
    /// Manual new-credential form, carrying the in-progress draft.
    EntryForm(EntryForm),
    /// Edit form for an existing credential, carrying the draft and the
    /// record being edited.
    EditForm(EditForm),
}

impl ModalContext {
    /// Returns true when no overlay is active.
    pub fn is_none(&self) -> bool {
        matches!(self, ModalContext::None)
    }

    /// Short name for trace output.
    pub fn label(&self) -> &'static str {
        match self {
            ModalContext::None => "none",
            ModalContext::EntryScanner => "entry-scanner",
            ModalContext::EntryForm(_) => "entry-form",
            ModalContext::EditForm(_) => "edit-form",
        }
    }
}
