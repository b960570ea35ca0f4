//! Password generation and strength estimation

pub mod charset;
mod generator;
mod strength;

pub use charset::{build_charset, class_pool, CharClass, AMBIGUOUS};
pub use generator::{generate_password, generate_password_with, GenerationOptions};
pub use strength::{effective_charset_size, estimate_strength, StrengthLabel, StrengthResult};
