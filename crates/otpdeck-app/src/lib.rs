//! Presentation coordination for otpdeck.
//!
//! One authority owns the current modal context (which overlay, if any, is
//! shown) and routes user actions into state transitions and presentation
//! side effects. Everything else — the vault, form validation, scanner
//! hardware, screen layout — lives behind seams this crate defines.

pub mod actions;
pub mod forms;
pub mod modal;
pub mod router;
pub mod scanner;
pub mod sink;

pub use actions::{Action, ActionReceiver, ActionSender, action_channel};
pub use forms::{EditForm, EntryForm};
pub use modal::ModalContext;
pub use router::ActionRouter;
pub use scanner::{ConfigScanner, ScannerCapability};
pub use sink::{PresentationSink, ScannerScreen, Screen};
