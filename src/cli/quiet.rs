//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::tty::IsTty;

/// Global quiet mode flag - suppresses warnings and the entropy line
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stderr is a tty (colour is only used there)
pub fn stderr_is_tty() -> bool {
    std::io::stderr().is_tty()
}
