use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_add_then_list_via_entry_form() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("otpdeck")
        .env("OTPDECK_HOME", dir.path())
        .write_stdin("add\nGitHub me@example.com JBSWY3DP\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Add credential --"))
        .stdout(predicate::str::contains("GitHub (me@example.com)"));
}

#[test]
fn test_edit_replaces_entry_in_place() {
    let dir = tempdir().unwrap();

    let input = "add\nAlpha a@example.com S1\n\
                 add\nBeta b@example.com S2\n\
                 edit 1\nGamma g@example.com S3\n\
                 list\nquit\n";

    cargo_bin_cmd!("otpdeck")
        .env("OTPDECK_HOME", dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Edit credential --"))
        .stdout(predicate::str::contains("  1. Gamma (g@example.com)"))
        .stdout(predicate::str::contains("  2. Beta (b@example.com)"))
        // Alpha appears in the edit heading, but never in a list row.
        .stdout(predicate::str::contains("  1. Alpha").not());
}

#[test]
fn test_scanner_overlay_when_capability_enabled() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "scanner_available = true\n").unwrap();

    cargo_bin_cmd!("otpdeck")
        .env("OTPDECK_HOME", dir.path())
        .write_stdin("add\nGitHub:me@example.com:JBSWY3DP\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- Scan credential --"))
        .stdout(predicate::str::contains("GitHub (me@example.com)"));
}

#[test]
fn test_cancel_leaves_vault_untouched() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("otpdeck")
        .env("OTPDECK_HOME", dir.path())
        .write_stdin("add\ncancel\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(overlay closed)"))
        .stdout(predicate::str::contains("No credentials yet"));
}
