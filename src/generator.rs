//! Strong password generator.

use rand::Rng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

use crate::charset::{ALPHABET, CharClass};

/// Shortest password the generator will produce.
pub const MIN_GENERATED_LENGTH: usize = 8;

/// Length used when the caller does not pick one.
pub const DEFAULT_GENERATED_LENGTH: usize = 12;

/// Generates a random password that passes every structural criterion.
///
/// Lengths below [`MIN_GENERATED_LENGTH`] are raised to it.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with_rng(length, &mut rand::thread_rng())
}

/// Same as [`generate_password`] with a caller-supplied random source.
///
/// One character is drawn from each class, the rest uniformly from the whole
/// alphabet, then the lot is shuffled so the guaranteed characters can land
/// anywhere.
pub fn generate_password_with_rng<R: Rng>(length: usize, rng: &mut R) -> SecretString {
    let length = length.max(MIN_GENERATED_LENGTH);

    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for class in CharClass::ALL {
        let symbols = class.symbols();
        chars.push(symbols[rng.gen_range(0..symbols.len())]);
    }
    for _ in CharClass::ALL.len()..length {
        chars.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    chars.shuffle(rng);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, "password generated");

    let password: String = chars.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::evaluate_password_strength;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_default_length() {
        let pwd = generate_password(DEFAULT_GENERATED_LENGTH);
        assert_eq!(pwd.expose_secret().len(), 12);
    }

    #[test]
    fn test_generate_clamps_short_lengths() {
        for length in [0, 1, 4, 7, 8] {
            let pwd = generate_password(length);
            assert_eq!(pwd.expose_secret().chars().count(), 8, "length {length}");
        }
    }

    #[test]
    fn test_generate_exact_lengths() {
        for length in [9, 16, 32, 100] {
            assert_eq!(generate_password(length).expose_secret().len(), length);
        }
    }

    #[test]
    fn test_generate_uses_only_alphabet() {
        let pwd = generate_password(64);
        assert!(pwd.expose_secret().bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_contains_every_class() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pwd = generate_password_with_rng(8, &mut rng);
            for class in CharClass::ALL {
                assert!(class.any_in(pwd.expose_secret()), "{:?} missing", class);
            }
        }
    }

    #[test]
    fn test_generated_passwords_are_strong() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for length in 0..40 {
            let pwd = generate_password_with_rng(length, &mut rng);
            assert_eq!(evaluate_password_strength(&pwd).score, 5);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_password_with_rng(20, &mut ChaCha8Rng::seed_from_u64(1234));
        let b = generate_password_with_rng(20, &mut ChaCha8Rng::seed_from_u64(1234));
        let c = generate_password_with_rng(20, &mut ChaCha8Rng::seed_from_u64(4321));
        assert_eq!(a.expose_secret(), b.expose_secret());
        assert_ne!(a.expose_secret(), c.expose_secret());
    }

    #[test]
    fn test_guaranteed_characters_are_not_fixed_in_place() {
        // Without the shuffle the first character would always be uppercase.
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let leading_non_upper = (0..100)
            .map(|_| generate_password_with_rng(8, &mut rng))
            .filter(|pwd| {
                let first = pwd.expose_secret().chars().next().unwrap();
                !first.is_ascii_uppercase()
            })
            .count();
        assert!(leading_non_upper > 0);
    }
}
