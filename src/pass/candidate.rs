//! Password buffer under construction.

use std::fmt;

use zeroize::Zeroize;

/// A fixed-length password attempt. Zeroized on drop.
pub struct Candidate(Vec<u8>);

impl Candidate {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Candidate(bytes)
    }

    #[inline]
    pub(crate) fn push(&mut self, c: u8) {
        self.0.push(c);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    pub fn as_str(&self) -> &str {
        // Safety: built only from Charset bytes, which are printable ASCII
        unsafe { std::str::from_utf8_unchecked(&self.0) }
    }
}

impl Drop for Candidate {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

// Keep passwords out of debug output and logs.
impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Candidate(len={})", self.0.len())
    }
}
