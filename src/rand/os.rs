//! Operating system entropy via `getrandom`.

use super::EntropySource;
use crate::error::Result;

/// The OS CSPRNG (`getrandom(2)`, `getentropy`, `BCryptGenRandom`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf)?;
        Ok(())
    }
}

#[cfg(target_os = "linux")]
pub fn source_name() -> &'static str {
    "getrandom(2)"
}

#[cfg(target_os = "macos")]
pub fn source_name() -> &'static str {
    "getentropy"
}

#[cfg(target_os = "windows")]
pub fn source_name() -> &'static str {
    "BCryptGenRandom"
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn source_name() -> &'static str {
    "OS CSPRNG"
}
