//! Pronounceable password generation.
//!
//! A password is built from alternating consonants and vowels, then one
//! position is overwritten with a digit and, optionally, another with a
//! symbol. Candidates are redrawn until they contain every required class
//! and their estimated entropy reaches the configured minimum.
//!
//! ```no_run
//! use pronpass::{pass, rand::Rand, settings::Config};
//!
//! let charset = pass::Charset::default();
//! let config = Config::new(&charset, 12, true, 60.0, 10_000)?;
//! let accepted = pass::search(&config, &charset, &mut Rand::os())?;
//! println!("{}", accepted.password.as_str());
//! # Ok::<(), pronpass::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod logging;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, Result};
