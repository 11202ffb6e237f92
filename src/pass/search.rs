//! Generate, validate, estimate, retry.

use tracing::{debug, trace};

use super::{Candidate, Charset, estimate_entropy, generate, is_valid, strength};
use crate::error::{Error, Result};
use crate::rand::{EntropySource, Rand};
use crate::settings::Config;

/// A password that passed validation and the entropy threshold.
#[derive(Debug)]
pub struct Accepted {
    pub password: Candidate,
    pub entropy_bits: f64,
    /// Candidates generated, including this one.
    pub attempts: usize,
}

/// Draw candidates until one is valid and meets `config.min_entropy_bits()`.
///
/// Rejected candidates are dropped (and zeroized) immediately. Stops with
/// [`Error::AttemptsExhausted`] after `config.max_attempts()` candidates.
pub fn search<S: EntropySource>(
    config: &Config,
    charset: &Charset,
    rng: &mut Rand<S>,
) -> Result<Accepted> {
    let symbols = config.include_symbols();

    for attempt in 1..=config.max_attempts() {
        let candidate = generate(charset, config.length(), symbols, rng)?;

        if !is_valid(charset, candidate.as_bytes(), symbols) {
            trace!(attempt, "retry: missing a required class");
            continue;
        }

        let entropy_bits = estimate_entropy(charset, candidate.as_bytes(), symbols);
        if entropy_bits < config.min_entropy_bits() {
            trace!(attempt, entropy_bits, "retry: below entropy threshold");
            continue;
        }

        debug!(
            attempt,
            entropy_bits,
            strength = strength(entropy_bits),
            "password accepted"
        );
        return Ok(Accepted {
            password: candidate,
            entropy_bits,
            attempts: attempt,
        });
    }

    Err(Error::AttemptsExhausted {
        attempts: config.max_attempts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::CharClass;
    use crate::rand::testing::Failing;

    fn count(charset: &Charset, pw: &Candidate, class: CharClass) -> usize {
        pw.as_bytes()
            .iter()
            .filter(|&&b| charset.class_of(b) == Some(class))
            .count()
    }

    #[test]
    fn twelve_with_symbols_at_sixty_bits() {
        let charset = Charset::default();
        let config = Config::new(&charset, 12, true, 60.0, 10_000).unwrap();
        let mut rng = Rand::os();

        for _ in 0..50 {
            let accepted = search(&config, &charset, &mut rng).unwrap();
            let pw = &accepted.password;
            assert_eq!(pw.len(), 12);
            assert!(count(&charset, pw, CharClass::Vowel) >= 1);
            assert!(count(&charset, pw, CharClass::Consonant) >= 1);
            assert!(count(&charset, pw, CharClass::Digit) >= 1);
            assert!(count(&charset, pw, CharClass::Symbol) >= 1);
            assert!(accepted.entropy_bits >= 60.0);
            assert!(accepted.attempts >= 1);
        }
    }

    #[test]
    fn accepted_entropy_matches_estimator() {
        let charset = Charset::default();
        let config = Config::new(&charset, 16, false, 60.0, 100).unwrap();
        let accepted = search(&config, &charset, &mut Rand::os()).unwrap();
        let again = estimate_entropy(&charset, accepted.password.as_bytes(), false);
        assert_eq!(accepted.entropy_bits, again);
    }

    #[test]
    fn shortest_feasible_length_converges() {
        let charset = Charset::default();
        let config = Config::new(&charset, 4, true, 0.0, 10_000).unwrap();
        let accepted = search(&config, &charset, &mut Rand::os()).unwrap();
        assert!(is_valid(&charset, accepted.password.as_bytes(), true));
    }

    #[test]
    fn exhausts_when_no_candidate_can_pass() {
        let charset = Charset::default();
        // Two characters never hold a vowel, a consonant and a digit.
        let config = Config::unchecked(2, false, 0.0, 5);
        let err = search(&config, &charset, &mut Rand::os()).unwrap_err();
        assert!(matches!(err, Error::AttemptsExhausted { attempts: 5 }));
    }

    #[test]
    fn random_failure_aborts_search() {
        let charset = Charset::default();
        let config = Config::new(&charset, 12, false, 60.0, 10).unwrap();
        let err = search(&config, &charset, &mut Rand::new(Failing)).unwrap_err();
        assert!(matches!(err, Error::Random(_)));
    }
}
