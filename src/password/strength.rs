//! Password strength estimation
//!
//! The estimate is a model over the *generation options*, not an audit of the
//! password text: entropy is `length * log2(charset size)`, where the charset
//! size comes from the options. A manually typed password is therefore scored
//! with whatever toggles are currently selected, regardless of the characters
//! it actually contains.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::charset::{class_pool, enabled_classes};
use super::generator::GenerationOptions;

/// Effective alphabet assumed for pronounceable passwords (21 consonants and
/// 5 vowels alternating, roughly 13 per position)
pub const PRONOUNCEABLE_CHARSET_SIZE: usize = 13;

pub const STRONG_BITS: f64 = 80.0;
pub const GOOD_BITS: f64 = 60.0;
pub const FAIR_BITS: f64 = 40.0;

/// Entropy at which `normalized` reaches 1.0
const NORMALIZE_BITS: f64 = 100.0;

/// Strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Bucket for an entropy estimate
    pub fn from_bits(bits: f64) -> Self {
        if bits >= STRONG_BITS {
            StrengthLabel::Strong
        } else if bits >= GOOD_BITS {
            StrengthLabel::Good
        } else if bits >= FAIR_BITS {
            StrengthLabel::Fair
        } else {
            StrengthLabel::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a strength estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    /// Estimated entropy in bits
    pub entropy_bits: f64,
    pub label: StrengthLabel,
    /// `entropy_bits / 100`, clamped into [0, 1]
    pub normalized: f64,
}

/// Alphabet size the options imply
pub fn effective_charset_size(options: &GenerationOptions) -> usize {
    if options.pronounceable {
        return PRONOUNCEABLE_CHARSET_SIZE;
    }

    let size: usize = enabled_classes(options)
        .into_iter()
        .map(|class| class_pool(class, options.avoid_ambiguous).len())
        .sum();

    // log2(0) is undefined
    size.max(1)
}

/// Estimate the strength of `password` under `options`.
///
/// # Example
/// ```
/// use localpass_core::{estimate_strength, GenerationOptions, StrengthLabel};
///
/// let result = estimate_strength("abcdefghijklmnop", &GenerationOptions::default());
/// assert_eq!(result.label, StrengthLabel::Strong);
/// ```
pub fn estimate_strength(password: &str, options: &GenerationOptions) -> StrengthResult {
    let charset_size = effective_charset_size(options) as f64;
    let length = password.chars().count() as f64;
    let entropy_bits = length * charset_size.log2();

    StrengthResult {
        entropy_bits,
        label: StrengthLabel::from_bits(entropy_bits),
        normalized: (entropy_bits / NORMALIZE_BITS).clamp(0.0, 1.0),
    }
}
