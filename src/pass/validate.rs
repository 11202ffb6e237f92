//! Character class coverage check.

use super::{CharClass, Charset};

/// True if `candidate` holds a vowel, a consonant, a digit and, when
/// `require_symbols`, a symbol. Bytes outside every class are ignored.
pub fn is_valid(charset: &Charset, candidate: &[u8], require_symbols: bool) -> bool {
    let mut has_vowel = false;
    let mut has_consonant = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for &c in candidate {
        match charset.class_of(c) {
            Some(CharClass::Vowel) => has_vowel = true,
            Some(CharClass::Consonant) => has_consonant = true,
            Some(CharClass::Digit) => has_digit = true,
            Some(CharClass::Symbol) => has_symbol = true,
            None => {}
        }
    }

    has_vowel && has_consonant && has_digit && (!require_symbols || has_symbol)
}
