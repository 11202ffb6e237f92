//! CLI context - bundles flags, saved defaults and the resolved run config.

use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use super::{CliFlags, prompts};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Result;
use crate::pass::{self, Accepted, Charset};
use crate::rand::{self, EntropySource, Rand};
use crate::settings::{Config, Settings};

/// Application context for CLI mode.
#[derive(Debug)]
pub struct Context {
    pub flags: CliFlags,
    pub saved: Settings,
    pub charset: Charset,
    pub config: Config,
}

impl Context {
    /// Resolve flags over saved defaults over built-in defaults.
    ///
    /// Fails if the symbol class is malformed or the combination can never
    /// yield an acceptable password.
    pub fn new(flags: CliFlags, saved: Settings) -> Result<Self> {
        let charset = match flags.special.as_deref().or(saved.special.as_deref()) {
            Some(special) => Charset::default().with_symbols(special.as_bytes())?,
            None => Charset::default(),
        };

        let config = Config::new(
            &charset,
            flags
                .length
                .or(saved.length)
                .unwrap_or(Config::DEFAULT_LENGTH),
            flags.symbols_override().or(saved.symbols).unwrap_or(false),
            flags
                .min_entropy
                .or(saved.min_entropy)
                .unwrap_or(Config::DEFAULT_MIN_ENTROPY),
            flags
                .max_attempts
                .or(saved.max_attempts)
                .unwrap_or(Config::DEFAULT_MAX_ATTEMPTS),
        )?;

        Ok(Self {
            flags,
            saved,
            charset,
            config,
        })
    }

    /// Run CLI: generate, print, copy, then save defaults if asked.
    pub fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(
            &mut Rand::os(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            &mut SystemClipboard,
            &Settings::path(),
        )
    }

    /// [`Context::run`] with every collaborator supplied by the caller.
    ///
    /// Defaults are written to `settings_path` only once a password has been
    /// printed.
    pub fn run_with<S, W, E, C>(
        &mut self,
        rng: &mut Rand<S>,
        out: &mut W,
        warnings: &mut E,
        clipboard: &mut C,
        settings_path: &Path,
    ) -> Result<()>
    where
        S: EntropySource,
        W: Write,
        E: Write,
        C: Clipboard,
    {
        debug!(
            source = rand::source_name(),
            length = self.config.length(),
            symbols = self.config.include_symbols(),
            min_entropy = self.config.min_entropy_bits(),
            "generating"
        );
        let accepted = pass::search(&self.config, &self.charset, rng)?;
        self.emit(out, warnings, &accepted, clipboard)?;
        self.handle_save(settings_path);
        Ok(())
    }

    /// Print the password and entropy line, then copy if requested.
    ///
    /// A clipboard failure is written to `warnings` even in quiet mode.
    pub fn emit<W: Write, E: Write, C: Clipboard>(
        &self,
        out: &mut W,
        warnings: &mut E,
        accepted: &Accepted,
        clipboard: &mut C,
    ) -> io::Result<()> {
        writeln!(out, "{}", accepted.password.as_str())?;
        if !self.flags.quiet {
            writeln!(out, "Estimated entropy: {:.2} bits", accepted.entropy_bits)?;
        }
        out.flush()?;

        if self.flags.clipboard {
            match clipboard.copy(accepted.password.as_str()) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => {
                    debug!(error = %e, "clipboard copy failed");
                    prompts::clipboard_error(warnings, &e)?;
                }
            }
        }
        Ok(())
    }

    /// Saved defaults with the options given on this command line applied.
    pub fn settings_to_save(&self) -> Settings {
        Settings {
            length: self.flags.length.or(self.saved.length),
            symbols: self.flags.symbols_override().or(self.saved.symbols),
            min_entropy: self.flags.min_entropy.or(self.saved.min_entropy),
            max_attempts: self.flags.max_attempts.or(self.saved.max_attempts),
            special: self.flags.special.clone().or(self.saved.special.clone()),
        }
    }

    fn handle_save(&mut self, path: &Path) {
        if !self.flags.save {
            return;
        }
        let settings = self.settings_to_save();
        match settings.save_to(path) {
            Ok(()) => {
                prompts::settings_saved(&path.display().to_string());
                self.saved = settings;
            }
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }
}
