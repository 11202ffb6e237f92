//! Pronounceable password construction.

use super::{Candidate, Charset};
use crate::error::Result;
use crate::rand::{EntropySource, Rand};

/// Build one candidate of exactly `length` characters.
///
/// Consonants and vowels alternate, starting with a consonant. One uniformly
/// chosen position is then overwritten with a digit and, if
/// `include_symbols`, a different position with a symbol. When `length == 1`
/// the symbol lands on the digit's slot; callers that need the digit must
/// use longer passwords (see [`crate::settings::Config`]).
pub fn generate<S: EntropySource>(
    charset: &Charset,
    length: usize,
    include_symbols: bool,
    rng: &mut Rand<S>,
) -> Result<Candidate> {
    let mut candidate = Candidate::from_bytes(Vec::with_capacity(length));
    while candidate.len() < length {
        candidate.push(rng.pick(charset.consonants())?);
        if candidate.len() < length {
            candidate.push(rng.pick(charset.vowels())?);
        }
    }

    if length == 0 {
        return Ok(candidate);
    }

    let buf = candidate.as_bytes_mut();

    let digit_pos = rng.below(length)?;
    buf[digit_pos] = rng.pick(charset.digits())?;

    if include_symbols {
        let mut symbol_pos = rng.below(length)?;
        while symbol_pos == digit_pos && length > 1 {
            symbol_pos = rng.below(length)?;
        }
        buf[symbol_pos] = rng.pick(charset.symbols())?;
    }

    Ok(candidate)
}
