//! Centralized warning and status messages for CLI output.
//!
//! Everything here goes to stderr; stdout carries only the password and its
//! entropy line.

use std::io::{self, Write};

use crossterm::style::Stylize;

use super::quiet;
use crate::clipboard::ClipboardError;

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if quiet::enabled() {
        return;
    }
    if quiet::stderr_is_tty() {
        eprintln!("{}", msg.yellow());
    } else {
        eprintln!("{msg}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    if quiet::stderr_is_tty() {
        eprintln!("{}", msg.red());
    } else {
        eprintln!("{msg}");
    }
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Print clipboard error - NOT suppressed (errors are always shown)
pub fn clipboard_error<W: Write>(out: &mut W, err: &ClipboardError) -> io::Result<()> {
    writeln!(out, "Clipboard error: {err}")
}

pub fn settings_unreadable(err: &dyn std::fmt::Display) {
    warn(&format!("Failed to load settings: {err}"));
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        eprintln!("Defaults saved \u{2192} {path}");
    }
}
