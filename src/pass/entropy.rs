//! Entropy estimation.
//!
//! The estimate is `length * log2(pool)` where the pool is the union of the
//! character classes seen in the password. It answers "how large was the pool
//! each position could have come from", not how many passwords the generator
//! can actually emit. Alternation and the single forced digit and symbol make
//! the real figure lower, so treat the number as advisory.

use super::{CharClass, Charset};

/// Estimated entropy of `candidate` in bits. Zero when no class is present.
pub fn estimate_entropy(charset: &Charset, candidate: &[u8], include_symbols: bool) -> f64 {
    let mut seen = [false; 4];
    for &c in candidate {
        if let Some(class) = charset.class_of(c) {
            seen[class as usize] = true;
        }
    }

    let mut pool = 0;
    for class in CharClass::ALL {
        if seen[class as usize] && (class != CharClass::Symbol || include_symbols) {
            pool += charset.class(class).len();
        }
    }

    calculate_entropy(candidate.len(), pool)
}

/// Entropy in bits of `length` draws from a pool of `charset_size`.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Strength description for an entropy figure.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn empty_is_zero() {
        let charset = Charset::default();
        assert_eq!(estimate_entropy(&charset, b"", false), 0.0);
        assert_eq!(estimate_entropy(&charset, b"", true), 0.0);
    }

    #[test]
    fn unknown_characters_only_is_zero() {
        let charset = Charset::default();
        assert_eq!(estimate_entropy(&charset, b"LL01", true), 0.0);
    }

    #[test]
    fn counts_observed_classes() {
        let charset = Charset::default();
        // 9 * log2(20 + 5 + 8)
        let e = estimate_entropy(&charset, b"futiboda9", false);
        assert!(close(e, 45.40), "{e}");
        // 10 * log2(20 + 5 + 8 + 3)
        let e = estimate_entropy(&charset, b"futiboda9@", true);
        assert!(close(e, 51.70), "{e}");
        // 3 * log2(20)
        let e = estimate_entropy(&charset, b"bcd", true);
        assert!(close(e, 12.97), "{e}");
    }

    #[test]
    fn symbols_ignored_unless_included() {
        let charset = Charset::default();
        let without = estimate_entropy(&charset, b"futiboda9@", false);
        // 10 * log2(33)
        assert!(close(without, 50.44), "{without}");
    }

    #[test]
    fn default_twelve_clears_sixty_bits() {
        let charset = Charset::default();
        assert!(estimate_entropy(&charset, b"futibodaka9e", false) >= 60.0);
        assert!(estimate_entropy(&charset, b"futibo@aka9e", true) >= 60.0);
    }

    #[test]
    fn strength_bands() {
        assert_eq!(strength(0.0), "Weak");
        assert_eq!(strength(45.4), "Fair");
        assert_eq!(strength(60.53), "Strong");
        assert_eq!(strength(128.0), "Very Strong");
    }
}
