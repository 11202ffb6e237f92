//! Error taxonomy for password generation.

use thiserror::Error;

use crate::pass::CharsetError;
use crate::settings::ConfigError;

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a run.
///
/// A candidate failing validation or the entropy threshold is not an error;
/// it is the retry path of [`crate::pass::search`].
#[derive(Debug, Error)]
pub enum Error {
    /// The OS random source failed. Never recovered from.
    #[error("secure random source failed: {0}")]
    Random(#[from] getrandom::Error),

    /// A draw was requested from an empty set.
    #[error("cannot draw from an empty range")]
    EmptyRange,

    /// Configuration can never produce an acceptable password.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Character classes are malformed.
    #[error(transparent)]
    Charset(#[from] CharsetError),

    /// Writing the password out failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The retry cap was reached without an acceptable candidate.
    #[error("no acceptable password after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of candidates generated
        attempts: usize,
    },
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::Charset(_) => 2,
            _ => 1,
        }
    }
}
