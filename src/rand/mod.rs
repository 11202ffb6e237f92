//! Random draws for password generation.
//!
//! Every character and position is drawn through [`Rand`], which reads the
//! OS CSPRNG and maps raw words onto a range by rejection sampling.

mod os;

use zeroize::Zeroize;

use crate::error::{Error, Result};

pub use os::{OsEntropy, source_name};

/// A source of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `buf` completely or fail.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Uniform sampler over an [`EntropySource`].
pub struct Rand<S = OsEntropy> {
    source: S,
}

impl Rand<OsEntropy> {
    /// Sampler backed by the operating system.
    pub fn os() -> Self {
        Rand::new(OsEntropy)
    }
}

impl<S: EntropySource> Rand<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[inline]
    pub fn next_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.source.fill(&mut buf)?;
        let word = u64::from_le_bytes(buf);
        buf.zeroize();
        Ok(word)
    }

    /// Uniform index in `[0, n)`.
    ///
    /// Words below `2^64 mod n` are redrawn so every residue has the same
    /// number of preimages.
    pub fn below(&mut self, n: usize) -> Result<usize> {
        if n == 0 {
            return Err(Error::EmptyRange);
        }
        let n = n as u64;
        let threshold = n.wrapping_neg() % n;
        loop {
            let word = self.next_u64()?;
            if word >= threshold {
                return Ok((word % n) as usize);
            }
        }
    }

    /// Uniform byte from `chars`.
    #[inline]
    pub fn pick(&mut self, chars: &[u8]) -> Result<u8> {
        let idx = self.below(chars.len())?;
        Ok(chars[idx])
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{Failing, Script};
    use super::*;

    #[test]
    fn below_rejects_words_under_threshold() {
        // 2^64 mod 3 == 1, so word 0 is redrawn and word 4 maps to 1.
        let mut rand = Rand::new(Script::new(&[0, 4]));
        assert_eq!(rand.below(3).unwrap(), 1);
    }

    #[test]
    fn below_power_of_two_accepts_everything() {
        let mut rand = Rand::new(Script::new(&[0, 7]));
        assert_eq!(rand.below(8).unwrap(), 0);
        assert_eq!(rand.below(8).unwrap(), 7);
    }

    #[test]
    fn below_zero_is_an_error() {
        let mut rand = Rand::os();
        assert!(matches!(rand.below(0), Err(Error::EmptyRange)));
    }

    #[test]
    fn failing_source_propagates() {
        let mut rand = Rand::new(Failing);
        assert!(matches!(rand.below(5), Err(Error::Random(_))));
        assert!(matches!(rand.pick(b"abc"), Err(Error::Random(_))));
    }

    #[test]
    fn pick_reaches_every_character() {
        let chars = b"abcdefgh!";
        let mut seen = [false; 9];
        let mut rand = Rand::os();
        for _ in 0..2000 {
            let c = rand.pick(chars).unwrap();
            let idx = chars.iter().position(|&x| x == c).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn below_is_roughly_uniform() {
        // Chi-square over 5 buckets, 4 degrees of freedom. 30.0 is far past
        // the 0.001 critical value (18.47).
        let n = 5;
        let trials = 10_000;
        let mut counts = [0usize; 5];
        let mut rand = Rand::os();
        for _ in 0..trials {
            counts[rand.below(n).unwrap()] += 1;
        }
        let expected = trials as f64 / n as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi2 < 30.0, "chi-square {chi2} counts {counts:?}");
    }
}
