//! Run configuration and up-front feasibility checks.

use thiserror::Error;

use crate::pass::{Charset, calculate_entropy};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("password length must be at least 1")]
    ZeroLength,

    #[error("length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },

    #[error("length {length} cannot hold the {required} required character classes")]
    TooShort { length: usize, required: usize },

    #[error("minimum entropy must be a non-negative number, got {0}")]
    InvalidEntropy(f64),

    #[error(
        "length {length} reaches at most {max:.2} bits, below the required {required:.2}; \
         use a longer password or a lower minimum"
    )]
    EntropyUnreachable {
        length: usize,
        max: f64,
        required: f64,
    },

    #[error("attempt limit must be at least 1")]
    ZeroAttempts,
}

/// Immutable parameters for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    length: usize,
    include_symbols: bool,
    min_entropy_bits: f64,
    max_attempts: usize,
}

impl Config {
    pub const DEFAULT_LENGTH: usize = 12;
    pub const DEFAULT_MIN_ENTROPY: f64 = 60.0;
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;
    /// Longest password accepted.
    pub const MAX_LENGTH: usize = 4096;

    /// Validate parameters against `charset`.
    ///
    /// Rejects any combination the retry loop could never satisfy: a length
    /// shorter than the number of required classes (this includes a single
    /// character, where the symbol would overwrite the digit) or a minimum
    /// entropy above what a valid password of this length can score.
    pub fn new(
        charset: &Charset,
        length: usize,
        include_symbols: bool,
        min_entropy_bits: f64,
        max_attempts: usize,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if length > Self::MAX_LENGTH {
            return Err(ConfigError::TooLong {
                length,
                max: Self::MAX_LENGTH,
            });
        }

        let required = required_classes(include_symbols);
        if length < required {
            return Err(ConfigError::TooShort { length, required });
        }

        if !min_entropy_bits.is_finite() || min_entropy_bits < 0.0 {
            return Err(ConfigError::InvalidEntropy(min_entropy_bits));
        }

        // A valid password holds exactly the required classes, so its
        // estimate is fixed by the length.
        let max = calculate_entropy(length, charset.mandatory_size(include_symbols));
        if max < min_entropy_bits {
            return Err(ConfigError::EntropyUnreachable {
                length,
                max,
                required: min_entropy_bits,
            });
        }

        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self {
            length,
            include_symbols,
            min_entropy_bits,
            max_attempts,
        })
    }

    #[cfg(test)]
    pub(crate) fn unchecked(
        length: usize,
        include_symbols: bool,
        min_entropy_bits: f64,
        max_attempts: usize,
    ) -> Self {
        Self {
            length,
            include_symbols,
            min_entropy_bits,
            max_attempts,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    pub fn min_entropy_bits(&self) -> f64 {
        self.min_entropy_bits
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

/// Vowel, consonant and digit, plus symbol when requested.
fn required_classes(include_symbols: bool) -> usize {
    if include_symbols { 4 } else { 3 }
}
