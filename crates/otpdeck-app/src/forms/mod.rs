//! Draft values for the entry and edit overlays.
//!
//! A form is mutable in-progress user input bound to a pending action
//! outcome. Forms reach the router only through an `ActionSender` capability
//! (never an owning pointer); their lifetime is scoped to the modal variant
//! that carries them and they are discarded on transition away.

mod edit;
mod entry;

pub use edit::EditForm;
pub use entry::EntryForm;
