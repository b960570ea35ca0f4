//! Character classes and alphabet construction

use super::generator::GenerationOptions;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:'\",.<>/?`~|";
pub const VOWELS: &str = "aeiou";

/// Characters easily confused with one another in common fonts
pub const AMBIGUOUS: [char; 10] = ['l', 'I', '1', 'O', '0', 'o', 'S', '5', 'B', '8'];

/// One of the four disjoint character pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// All classes in alphabet order
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// Unfiltered pool
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn is_enabled(self, options: &GenerationOptions) -> bool {
        match self {
            CharClass::Lowercase => options.lowercase,
            CharClass::Uppercase => options.uppercase,
            CharClass::Numbers => options.numbers,
            CharClass::Symbols => options.symbols,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(&c)
}

/// Enabled classes in alphabet order
pub fn enabled_classes(options: &GenerationOptions) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|class| class.is_enabled(options))
        .collect()
}

/// Pool for a single class, without ambiguous characters when requested
pub fn class_pool(class: CharClass, avoid_ambiguous: bool) -> Vec<char> {
    filtered(class.chars(), avoid_ambiguous)
}

/// Build the full alphabet for class-based generation.
///
/// Enabled pools are concatenated in the order lowercase, uppercase, numbers,
/// symbols, then ambiguous characters are dropped if requested. The pools are
/// disjoint so the result has no duplicates. An empty result means no class
/// is enabled and must not be generated from.
///
/// # Example
/// ```
/// use localpass_core::{build_charset, GenerationOptions};
///
/// let options = GenerationOptions {
///     lowercase: false,
///     uppercase: false,
///     numbers: true,
///     symbols: false,
///     avoid_ambiguous: true,
///     ..Default::default()
/// };
/// let charset: String = build_charset(&options).into_iter().collect();
/// assert_eq!(charset, "234679");
/// ```
pub fn build_charset(options: &GenerationOptions) -> Vec<char> {
    enabled_classes(options)
        .into_iter()
        .flat_map(|class| class_pool(class, options.avoid_ambiguous))
        .collect()
}

/// Consonants for pronounceable mode
pub fn consonant_pool(avoid_ambiguous: bool) -> Vec<char> {
    LOWERCASE
        .chars()
        .filter(|c| !VOWELS.contains(*c))
        .filter(|c| !(avoid_ambiguous && is_ambiguous(*c)))
        .collect()
}

/// Vowels for pronounceable mode. Never filtered, so `o` can appear even
/// when ambiguous characters are avoided.
pub fn vowel_pool() -> Vec<char> {
    VOWELS.chars().collect()
}

fn filtered(pool: &str, avoid_ambiguous: bool) -> Vec<char> {
    pool.chars()
        .filter(|c| !(avoid_ambiguous && is_ambiguous(*c)))
        .collect()
}
