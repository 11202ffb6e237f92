use proptest::prelude::*;

use pronpass::pass::{CharClass, Charset, estimate_entropy, generate, is_valid, search};
use pronpass::rand::Rand;
use pronpass::settings::Config;

fn has(charset: &Charset, pw: &[u8], class: CharClass) -> bool {
    pw.iter().any(|&b| charset.class_of(b) == Some(class))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn accepted_passwords_meet_every_requirement(
        length in 12usize..40,
        symbols in any::<bool>(),
        min_entropy in 0.0f64..60.0,
    ) {
        let charset = Charset::default();
        let config = Config::new(&charset, length, symbols, min_entropy, 10_000).unwrap();
        let accepted = search(&config, &charset, &mut Rand::os()).unwrap();
        let pw = accepted.password.as_bytes();

        prop_assert_eq!(pw.len(), length);
        prop_assert!(is_valid(&charset, pw, symbols));
        prop_assert!(estimate_entropy(&charset, pw, symbols) >= min_entropy);
        prop_assert!(has(&charset, pw, CharClass::Vowel));
        prop_assert!(has(&charset, pw, CharClass::Consonant));
        prop_assert!(has(&charset, pw, CharClass::Digit));
        prop_assert_eq!(has(&charset, pw, CharClass::Symbol), symbols);
    }

    #[test]
    fn generated_length_is_exact(length in 0usize..64, symbols in any::<bool>()) {
        let charset = Charset::default();
        let candidate = generate(&charset, length, symbols, &mut Rand::os()).unwrap();
        prop_assert_eq!(candidate.len(), length);
    }

    #[test]
    fn validation_is_deterministic(input in "[a-z0-9!@#]{0,24}", symbols in any::<bool>()) {
        let charset = Charset::default();
        let first = is_valid(&charset, input.as_bytes(), symbols);
        let second = is_valid(&charset, input.as_bytes(), symbols);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn entropy_is_never_negative(input in "[ -~]{0,32}", symbols in any::<bool>()) {
        let charset = Charset::default();
        let bits = estimate_entropy(&charset, input.as_bytes(), symbols);
        prop_assert!(bits >= 0.0);
        prop_assert!(bits.is_finite());
    }

    #[test]
    fn each_character_has_at_most_one_class(c in 0u8..128) {
        let charset = Charset::default();
        let owners = CharClass::ALL
            .iter()
            .filter(|&&class| charset.class(class).contains(&c))
            .count();
        prop_assert!(owners <= 1);
    }
}

#[test]
fn every_class_member_is_reachable() {
    let charset = Charset::default();
    let mut rng = Rand::os();
    for class in CharClass::ALL {
        let chars = charset.class(class);
        let mut seen = vec![false; chars.len()];
        for _ in 0..chars.len() * 200 {
            let c = rng.pick(chars).unwrap();
            seen[chars.iter().position(|&x| x == c).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s), "{} not fully reachable", class.name());
    }
}

#[test]
fn twelve_with_symbols_at_sixty_bits() {
    let charset = Charset::default();
    let config = Config::new(&charset, 12, true, 60.0, 10_000).unwrap();
    let accepted = search(&config, &charset, &mut Rand::os()).unwrap();
    let pw = accepted.password.as_bytes();
    assert_eq!(pw.len(), 12);
    for class in CharClass::ALL {
        assert!(has(&charset, pw, class), "missing {}", class.name());
    }
    assert!(accepted.entropy_bits >= 60.0);
}
