//! Clipboard output.
//!
//! The password is piped to the platform utility (`pbcopy` on macOS,
//! `xclip -selection clipboard` on Linux). On Linux without `xclip` the
//! system clipboard is used directly. Failures here never affect the password
//! already printed.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard not supported on this OS")]
    Unsupported,

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to {program}: {source}")]
    Io {
        program: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}")]
    Status {
        program: &'static str,
        status: ExitStatus,
    },

    #[error("system clipboard unavailable: {0}")]
    System(String),
}

/// Destination for an accepted password.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let Some((program, args)) = utility() else {
            return Err(ClipboardError::Unsupported);
        };

        match pipe(program, args, text.as_bytes()) {
            Err(ClipboardError::Spawn { source, .. })
                if cfg!(target_os = "linux") && source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(program, "clipboard utility missing, using system clipboard");
                system(text)
            }
            other => other,
        }
    }
}

const PBCOPY_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];

/// Clipboard utility and its arguments for this platform.
pub fn utility() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("pbcopy", PBCOPY_ARGS))
    } else if cfg!(target_os = "linux") {
        Some(("xclip", XCLIP_ARGS))
    } else {
        None
    }
}

/// Write `bytes` to the stdin of `program` and wait for it to exit.
fn pipe(program: &'static str, args: &[&str], bytes: &[u8]) -> Result<(), ClipboardError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn { program, source })?;

    // Dropping stdin closes the pipe so the utility sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(bytes),
        None => Ok(()),
    };

    let status = child
        .wait()
        .map_err(|source| ClipboardError::Io { program, source })?;
    if !status.success() {
        return Err(ClipboardError::Status { program, status });
    }
    written.map_err(|source| ClipboardError::Io { program, source })?;

    debug!(program, "copied to clipboard");
    Ok(())
}

fn system(text: &str) -> Result<(), ClipboardError> {
    let mut ctx = ClipboardContext::new().map_err(|e| ClipboardError::System(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::System(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
