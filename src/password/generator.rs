//! Password generation
//!
//! Two modes, selected by [`GenerationOptions::pronounceable`]:
//!
//! - class-based: one character from each enabled class, the rest drawn from
//!   the full alphabet, then a Fisher-Yates shuffle
//! - pronounceable: alternating consonant/vowel, lowercase only
//!
//! All draws go through [`SecureRandom::uniform_index`], so every position is
//! free of modulo bias.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::charset::{build_charset, class_pool, consonant_pool, enabled_classes, vowel_pool};
use crate::crypto::{OsRandom, SecureRandom};
use crate::error::{LocalPassError, Result};
use crate::{PASSWORD_DEFAULT_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH};

/// Options for password generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    /// Requested length, clamped into 8..=64 before use
    pub length: usize,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include digits (0-9)
    pub numbers: bool,
    /// Include the 31 punctuation symbols
    pub symbols: bool,
    /// Drop `l I 1 O 0 o S 5 B 8`
    pub avoid_ambiguous: bool,
    /// Alternate consonants and vowels instead of using the classes
    pub pronounceable: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: PASSWORD_DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            avoid_ambiguous: true,
            pronounceable: false,
        }
    }
}

impl GenerationOptions {
    /// Length actually generated
    pub fn clamped_length(&self) -> usize {
        self.length.clamp(PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH)
    }
}

/// Generate a password with the OS random source.
///
/// # Errors
/// [`LocalPassError::NoCharacterClass`] in class-based mode with every class
/// disabled; [`LocalPassError::RandomUnavailable`] if the CSPRNG fails.
///
/// # Example
/// ```
/// use localpass_core::{generate_password, GenerationOptions};
///
/// let options = GenerationOptions {
///     length: 24,
///     symbols: true,
///     avoid_ambiguous: false,
///     ..Default::default()
/// };
/// let password = generate_password(&options).unwrap();
/// assert_eq!(password.chars().count(), 24);
/// ```
pub fn generate_password(options: &GenerationOptions) -> Result<String> {
    generate_password_with(&mut OsRandom, options)
}

/// Generate a password drawing from `rng`
pub fn generate_password_with<R>(rng: &mut R, options: &GenerationOptions) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    let length = options.clamped_length();

    let password = if options.pronounceable {
        generate_pronounceable(rng, length, options.avoid_ambiguous)?
    } else {
        generate_with_classes(rng, length, options)?
    };

    debug!(length, pronounceable = options.pronounceable, "generated password");
    Ok(password)
}

fn generate_pronounceable<R>(rng: &mut R, length: usize, avoid_ambiguous: bool) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    let consonants = consonant_pool(avoid_ambiguous);
    let vowels = vowel_pool();

    let mut password = String::with_capacity(length);
    for i in 0..length {
        let pool = if i % 2 == 0 { &consonants } else { &vowels };
        password.push(rng.pick(pool)?);
    }
    Ok(password)
}

fn generate_with_classes<R>(rng: &mut R, length: usize, options: &GenerationOptions) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    let charset = build_charset(options);
    if charset.is_empty() {
        return Err(LocalPassError::NoCharacterClass);
    }

    let mut chars = Vec::with_capacity(length);

    // At most four classes against a minimum length of eight, so these always fit
    for class in enabled_classes(options) {
        let pool = class_pool(class, options.avoid_ambiguous);
        chars.push(rng.pick(&pool)?);
    }

    while chars.len() < length {
        chars.push(rng.pick(&charset)?);
    }

    shuffle(rng, &mut chars)?;
    Ok(chars.into_iter().collect())
}

/// Uniform Fisher-Yates shuffle
pub(crate) fn shuffle<R, T>(rng: &mut R, items: &mut [T]) -> Result<()>
where
    R: SecureRandom + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.uniform_index(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{generate_password, generate_password_with, shuffle, GenerationOptions};
    use crate::crypto::random::testing::{ScriptedRandom, SeededRandom};
    use crate::error::LocalPassError;
    use crate::password::charset::{is_ambiguous, CharClass, SYMBOLS};
    use proptest::prelude::*;

    fn has_any(password: &str, class: CharClass) -> bool {
        password.chars().any(|c| class.contains(c))
    }

    fn only_classes(lower: bool, upper: bool, numbers: bool, symbols: bool) -> GenerationOptions {
        GenerationOptions {
            length: 20,
            lowercase: lower,
            uppercase: upper,
            numbers,
            symbols,
            avoid_ambiguous: false,
            pronounceable: false,
        }
    }

    #[test]
    fn test_generate_password_default() {
        let options = GenerationOptions::default();
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 16);
    }

    #[test]
    fn test_generate_password_length() {
        let options = GenerationOptions {
            length: 32,
            ..Default::default()
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.chars().count(), 32);
    }

    #[test]
    fn test_length_clamped() {
        for (requested, expected) in [(0, 8), (3, 8), (8, 8), (64, 64), (65, 64), (1000, 64)] {
            let options = GenerationOptions {
                length: requested,
                ..Default::default()
            };
            assert_eq!(generate_password(&options).unwrap().chars().count(), expected);

            let pronounceable = GenerationOptions {
                pronounceable: true,
                ..options
            };
            assert_eq!(generate_password(&pronounceable).unwrap().chars().count(), expected);
        }
    }

    #[test]
    fn test_generate_password_lowercase_only() {
        let password = generate_password(&only_classes(true, false, false, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_password_uppercase_only() {
        let password = generate_password(&only_classes(false, true, false, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_password_digits_only() {
        let password = generate_password(&only_classes(false, false, true, false)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_password_symbols_only() {
        let password = generate_password(&only_classes(false, false, false, true)).unwrap();
        assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_includes_selected_character_types() {
        let options = GenerationOptions {
            length: 24,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
            avoid_ambiguous: false,
            pronounceable: false,
        };
        for _ in 0..50 {
            let password = generate_password(&options).unwrap();
            assert_eq!(password.chars().count(), 24);
            for class in CharClass::ALL {
                assert!(has_any(&password, class), "{:?} missing from {}", class, password);
            }
        }
    }

    #[test]
    fn test_no_class_selected_is_error() {
        let options = only_classes(false, false, false, false);
        assert!(matches!(
            generate_password(&options),
            Err(LocalPassError::NoCharacterClass)
        ));
    }

    #[test]
    fn test_pronounceable_ignores_classes() {
        let options = GenerationOptions {
            length: 20,
            pronounceable: true,
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
            avoid_ambiguous: true,
        };
        let password = generate_password(&options).unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_pronounceable_alternates() {
        let options = GenerationOptions {
            length: 30,
            pronounceable: true,
            ..Default::default()
        };
        let password = generate_password(&options).unwrap();
        for (i, c) in password.chars().enumerate() {
            let vowel = "aeiou".contains(c);
            assert_eq!(vowel, i % 2 == 1, "position {} of {}", i, password);
        }
    }

    #[test]
    fn test_pronounceable_avoid_ambiguous_drops_l_only() {
        let options = GenerationOptions {
            length: 64,
            pronounceable: true,
            avoid_ambiguous: true,
            ..Default::default()
        };
        for _ in 0..20 {
            let password = generate_password(&options).unwrap();
            assert!(password.chars().step_by(2).all(|c| c != 'l'));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let options = GenerationOptions::default();
        let a = generate_password_with(&mut SeededRandom::new(99), &options).unwrap();
        let b = generate_password_with(&mut SeededRandom::new(99), &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_required_characters_not_front_loaded() {
        // Only lowercase and numbers: without the shuffle position 0 would always be lowercase
        let options = GenerationOptions {
            length: 8,
            ..only_classes(true, false, true, false)
        };
        let mut rng = SeededRandom::new(5);
        let mut first_is_digit = 0;
        for _ in 0..300 {
            let password = generate_password_with(&mut rng, &options).unwrap();
            if password.starts_with(|c: char| c.is_ascii_digit()) {
                first_is_digit += 1;
            }
        }
        assert!(first_is_digit > 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SeededRandom::new(3);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut rng, &mut items).unwrap();
        assert_ne!(items, (0..50).collect::<Vec<u32>>());
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn test_shuffle_positions_uniform() {
        // Each of the three elements should land first about a third of the time
        let mut rng = SeededRandom::new(11);
        let mut counts = [0usize; 3];
        for _ in 0..30_000 {
            let mut items = [0usize, 1, 2];
            shuffle(&mut rng, &mut items).unwrap();
            counts[items[0]] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "count {}", count);
        }
    }

    #[test]
    fn test_random_failure_aborts_generation() {
        let mut rng = ScriptedRandom::new(&[1, 2, 3]);
        assert!(matches!(
            generate_password_with(&mut rng, &GenerationOptions::default()),
            Err(LocalPassError::RandomUnavailable(_))
        ));
    }

    #[test]
    fn test_generate_password_uniqueness() {
        let options = GenerationOptions::default();
        let p1 = generate_password(&options).unwrap();
        let p2 = generate_password(&options).unwrap();
        assert_ne!(p1, p2);
    }

    #[test]
    fn test_options_serde_defaults() {
        let options: GenerationOptions = serde_json::from_str(r#"{"length": 24, "symbols": true}"#).unwrap();
        assert_eq!(options.length, 24);
        assert!(options.symbols);
        assert!(options.lowercase);
        assert!(options.avoid_ambiguous);
        assert!(!options.pronounceable);

        let json = serde_json::to_value(GenerationOptions::default()).unwrap();
        assert_eq!(json["avoidAmbiguous"], serde_json::json!(true));
    }

    proptest! {
        #[test]
        fn prop_class_based_output_valid(
            length in 0usize..100,
            lowercase in any::<bool>(),
            uppercase in any::<bool>(),
            numbers in any::<bool>(),
            symbols in any::<bool>(),
            avoid_ambiguous in any::<bool>(),
            seed in any::<u64>(),
        ) {
            prop_assume!(lowercase || uppercase || numbers || symbols);
            let options = GenerationOptions {
                length,
                lowercase,
                uppercase,
                numbers,
                symbols,
                avoid_ambiguous,
                pronounceable: false,
            };

            let password = generate_password_with(&mut SeededRandom::new(seed), &options).unwrap();

            prop_assert_eq!(password.chars().count(), options.clamped_length());
            for class in CharClass::ALL {
                if class.is_enabled(&options) {
                    prop_assert!(has_any(&password, class));
                } else {
                    prop_assert!(!has_any(&password, class));
                }
            }
            if avoid_ambiguous {
                prop_assert!(!password.chars().any(is_ambiguous));
            }
        }

        #[test]
        fn prop_pronounceable_is_lowercase(
            length in 0usize..100,
            lowercase in any::<bool>(),
            uppercase in any::<bool>(),
            numbers in any::<bool>(),
            symbols in any::<bool>(),
            avoid_ambiguous in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let options = GenerationOptions {
                length,
                lowercase,
                uppercase,
                numbers,
                symbols,
                avoid_ambiguous,
                pronounceable: true,
            };

            let password = generate_password_with(&mut SeededRandom::new(seed), &options).unwrap();

            prop_assert_eq!(password.len(), options.clamped_length());
            prop_assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
