//! Interactive session: the single-threaded host loop around the router.
//!
//! One logical thread does everything: read a line, route it (to the active
//! overlay screen if one is presented, to the top-level commands otherwise),
//! then drain the action queue into the router in arrival order. The router
//! presents and dismisses overlays through `TerminalSink`, which keeps the
//! current screen in a shared presentation slot so the loop knows where the
//! next line belongs.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use otpdeck_app::{
    Action, ActionReceiver, ActionRouter, ActionSender, ConfigScanner, PresentationSink, Screen,
    action_channel,
};
use otpdeck_core::config::Config;
use otpdeck_core::{CredentialDraft, Vault, VaultSnapshot};

/// The single top-level presentation slot. At most one overlay is ever here.
type Slot = Rc<RefCell<Option<Screen>>>;

type SessionRouter = ActionRouter<Vault, TerminalSink, ConfigScanner>;

/// Line-oriented presentation sink.
///
/// Presenting prints the overlay heading and its input hint, then parks the
/// screen in the slot; dismissing clears the slot. Dismiss with an empty
/// slot is a no-op, as the sink contract requires.
struct TerminalSink {
    slot: Slot,
}

impl PresentationSink for TerminalSink {
    fn present(&mut self, screen: Screen) {
        println!("-- {} --", screen.title());
        match &screen {
            Screen::Scanner(_) => {
                println!("Paste a payload as issuer:account:secret, or type 'cancel'.");
            }
            Screen::EntryForm(_) => {
                println!("Enter: <issuer> <account> <secret>, or 'cancel'.");
            }
            Screen::EditForm(form) => {
                println!("Editing {}.", form.credential().label());
                println!("Enter: <issuer> <account> <secret>, or 'cancel'.");
            }
        }
        *self.slot.borrow_mut() = Some(screen);
    }

    fn dismiss(&mut self) {
        if self.slot.borrow_mut().take().is_some() {
            println!("(overlay closed)");
        }
    }
}

/// Runs the interactive session until `quit` or EOF.
pub fn run(config: &Config) -> Result<()> {
    let (tx, mut rx) = action_channel();
    let slot: Slot = Rc::default();
    let sink = TerminalSink {
        slot: Rc::clone(&slot),
    };
    let mut router = ActionRouter::new(
        Vault::new(),
        sink,
        ConfigScanner::from_config(config),
        tx.clone(),
    );

    println!("otpdeck — type 'add', 'edit <n>', 'list', 'export', or 'quit'.");

    let stdin = io::stdin();
    loop {
        prompt(&slot)?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Clone the screen out of the slot before dispatching: the router
        // mutates the slot through the sink while handling the resulting
        // actions.
        let active = slot.borrow().clone();
        match active {
            Some(screen) => route_overlay_line(&screen, line),
            None => {
                if !handle_command(&router, &tx, line)? {
                    break;
                }
            }
        }

        drain(&mut router, &mut rx);
    }

    Ok(())
}

fn prompt(slot: &Slot) -> Result<()> {
    let tag = slot.borrow().as_ref().map_or("deck", |screen| match screen {
        Screen::Scanner(_) => "scan",
        Screen::EntryForm(_) => "add",
        Screen::EditForm(_) => "edit",
    });
    print!("{tag}> ");
    io::stdout().flush()?;
    Ok(())
}

/// Feeds queued actions to the router, strictly in arrival order.
fn drain(router: &mut SessionRouter, rx: &mut ActionReceiver) {
    while let Ok(action) = rx.try_recv() {
        router.handle(action);
    }
}

/// Handles a top-level command. Returns false when the session should end.
fn handle_command(router: &SessionRouter, tx: &ActionSender, line: &str) -> Result<bool> {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("add") => {
            let _ = tx.send(Action::BeginEntry);
        }
        Some("edit") => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n >= 1 => {
                let snapshot = router.snapshot();
                if let Some(credential) = snapshot.credentials.get(n - 1) {
                    let _ = tx.send(Action::BeginEdit(credential.clone()));
                } else {
                    println!("No credential #{n}. Try 'list'.");
                }
            }
            _ => println!("Usage: edit <n>"),
        },
        Some("list") => print_list(&router.snapshot()),
        Some("export") => {
            let json = serde_json::to_string_pretty(&router.snapshot())?;
            println!("{json}");
        }
        Some("quit" | "exit") => return Ok(false),
        _ => {
            println!("Commands: add, edit <n>, list, export, quit");
        }
    }
    Ok(true)
}

fn print_list(snapshot: &VaultSnapshot) {
    if snapshot.credentials.is_empty() {
        println!("No credentials yet. Type 'add' to create one.");
        return;
    }
    for (i, credential) in snapshot.credentials.iter().enumerate() {
        println!("{:>3}. {}", i + 1, credential.label());
    }
}

/// Routes a line of input to the overlay that is currently presented.
fn route_overlay_line(screen: &Screen, line: &str) {
    match screen {
        Screen::EntryForm(form) => match parse_form_input(line) {
            FormInput::Cancel => form.cancel(),
            FormInput::Save(draft) => {
                let mut form = form.clone();
                form.set_issuer(draft.issuer);
                form.set_account(draft.account);
                form.set_secret(draft.secret);
                form.submit();
            }
            FormInput::Invalid => println!("Enter: <issuer> <account> <secret>, or 'cancel'."),
        },
        Screen::EditForm(form) => match parse_form_input(line) {
            FormInput::Cancel => form.cancel(),
            FormInput::Save(draft) => {
                let mut form = form.clone();
                form.set_issuer(draft.issuer);
                form.set_account(draft.account);
                form.set_secret(draft.secret);
                form.submit();
            }
            FormInput::Invalid => println!("Enter: <issuer> <account> <secret>, or 'cancel'."),
        },
        Screen::Scanner(scanner) => match parse_scan_payload(line) {
            FormInput::Cancel => scanner.cancel(),
            FormInput::Save(draft) => scanner.did_scan(draft),
            FormInput::Invalid => {
                println!("Paste a payload as issuer:account:secret, or type 'cancel'.");
            }
        },
    }
}

/// Outcome of parsing one line of overlay input.
#[derive(Debug, PartialEq, Eq)]
enum FormInput {
    Cancel,
    Save(CredentialDraft),
    Invalid,
}

/// Form lines are three whitespace-separated fields, or 'cancel'.
fn parse_form_input(line: &str) -> FormInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("cancel") {
        return FormInput::Cancel;
    }
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(issuer), Some(account), Some(secret), None) => {
            FormInput::Save(CredentialDraft::new(issuer, account, secret))
        }
        _ => FormInput::Invalid,
    }
}

/// Scan payloads stand in for a camera frame: issuer:account:secret.
fn parse_scan_payload(line: &str) -> FormInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case("cancel") {
        return FormInput::Cancel;
    }
    let fields: Vec<&str> = line.split(':').collect();
    match fields.as_slice() {
        [issuer, account, secret] if !issuer.is_empty() && !secret.is_empty() => {
            FormInput::Save(CredentialDraft::new(*issuer, *account, *secret))
        }
        _ => FormInput::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_input_three_fields() {
        assert_eq!(
            parse_form_input("GitHub me@example.com JBSWY3DP"),
            FormInput::Save(CredentialDraft::new("GitHub", "me@example.com", "JBSWY3DP"))
        );
    }

    #[test]
    fn test_parse_form_input_cancel_and_garbage() {
        assert_eq!(parse_form_input("  CANCEL "), FormInput::Cancel);
        assert_eq!(parse_form_input("only two"), FormInput::Invalid);
        assert_eq!(parse_form_input("one two three four"), FormInput::Invalid);
    }

    #[test]
    fn test_parse_scan_payload() {
        assert_eq!(
            parse_scan_payload("GitHub:me@example.com:JBSWY3DP"),
            FormInput::Save(CredentialDraft::new("GitHub", "me@example.com", "JBSWY3DP"))
        );
        assert_eq!(parse_scan_payload("cancel"), FormInput::Cancel);
        assert_eq!(parse_scan_payload(":missing:issuer"), FormInput::Invalid);
        assert_eq!(parse_scan_payload("no-separators"), FormInput::Invalid);
    }

    #[test]
    fn test_terminal_sink_slot_lifecycle() {
        let slot: Slot = Rc::default();
        let mut sink = TerminalSink {
            slot: Rc::clone(&slot),
        };

        // Dismiss with nothing shown is a no-op.
        sink.dismiss();
        assert!(slot.borrow().is_none());

        let (tx, _rx) = action_channel();
        let mut router = ActionRouter::new(
            Vault::new(),
            TerminalSink {
                slot: Rc::clone(&slot),
            },
            ConfigScanner::fixed(true),
            tx,
        );
        router.handle(Action::BeginEntry);
        assert!(matches!(&*slot.borrow(), Some(Screen::Scanner(_))));

        router.handle(Action::CancelEntry);
        assert!(slot.borrow().is_none());
    }
}
