//! Character classes for pronounceable passwords.

use thiserror::Error;

const VOWELS: &[u8] = b"aeiou";
// No `l`, it reads as `1` and `I` in many fonts.
const CONSONANTS: &[u8] = b"bcdfghjkmnpqrstvwxyz";
// No `0` or `1`.
const DIGITS: &[u8] = b"23456789";
const SYMBOLS: &[u8] = b"!@#";

/// One of the four disjoint character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Vowel,
    Consonant,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Vowel,
        CharClass::Consonant,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Vowel => "vowels",
            CharClass::Consonant => "consonants",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CharsetError {
    #[error("character class {0} is empty")]
    Empty(&'static str),

    #[error("character {0:?} in {1} is not printable ASCII")]
    NotPrintable(char, &'static str),

    #[error("character {0:?} appears more than once in {1}")]
    Duplicate(char, &'static str),

    #[error("character {0:?} belongs to both {1} and {2}")]
    Overlap(char, &'static str, &'static str),
}

/// Four disjoint, non-empty classes of printable ASCII.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    vowels: Vec<u8>,
    consonants: Vec<u8>,
    digits: Vec<u8>,
    symbols: Vec<u8>,
}

impl Charset {
    pub fn new(
        vowels: &[u8],
        consonants: &[u8],
        digits: &[u8],
        symbols: &[u8],
    ) -> Result<Self, CharsetError> {
        let charset = Self {
            vowels: vowels.to_vec(),
            consonants: consonants.to_vec(),
            digits: digits.to_vec(),
            symbols: symbols.to_vec(),
        };
        charset.check()?;
        Ok(charset)
    }

    /// Same classes with the symbol class replaced.
    pub fn with_symbols(&self, symbols: &[u8]) -> Result<Self, CharsetError> {
        Self::new(&self.vowels, &self.consonants, &self.digits, symbols)
    }

    pub fn class(&self, class: CharClass) -> &[u8] {
        match class {
            CharClass::Vowel => &self.vowels,
            CharClass::Consonant => &self.consonants,
            CharClass::Digit => &self.digits,
            CharClass::Symbol => &self.symbols,
        }
    }

    pub fn vowels(&self) -> &[u8] {
        &self.vowels
    }

    pub fn consonants(&self) -> &[u8] {
        &self.consonants
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Class containing `c`, if any.
    #[inline]
    pub fn class_of(&self, c: u8) -> Option<CharClass> {
        CharClass::ALL
            .iter()
            .copied()
            .find(|&class| self.class(class).contains(&c))
    }

    /// Total size of the classes a valid password must contain.
    pub fn mandatory_size(&self, include_symbols: bool) -> usize {
        let mut size = self.vowels.len() + self.consonants.len() + self.digits.len();
        if include_symbols {
            size += self.symbols.len();
        }
        size
    }

    fn check(&self) -> Result<(), CharsetError> {
        let mut owner: [Option<CharClass>; 128] = [None; 128];

        for class in CharClass::ALL {
            let chars = self.class(class);
            if chars.is_empty() {
                return Err(CharsetError::Empty(class.name()));
            }
            for &c in chars {
                if !c.is_ascii_graphic() {
                    return Err(CharsetError::NotPrintable(c as char, class.name()));
                }
                match owner[c as usize] {
                    Some(prev) if prev == class => {
                        return Err(CharsetError::Duplicate(c as char, class.name()));
                    }
                    Some(prev) => {
                        return Err(CharsetError::Overlap(c as char, prev.name(), class.name()));
                    }
                    None => owner[c as usize] = Some(class),
                }
            }
        }
        Ok(())
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            vowels: VOWELS.to_vec(),
            consonants: CONSONANTS.to_vec(),
            digits: DIGITS.to_vec(),
            symbols: SYMBOLS.to_vec(),
        }
    }
}
