//! Common utility functions

use chrono::{DateTime, Utc};

/// Character shown in place of each hidden password character
pub const MASK_CHAR: char = '•';

/// Masked passwords never show more than this many characters
pub const MASK_MAX_LENGTH: usize = 10;

/// Get current UTC datetime
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Mask a password for display.
///
/// The mask is capped at [`MASK_MAX_LENGTH`] so it does not reveal the length
/// of long passwords.
pub fn mask_password(password: &str) -> String {
    let count = password.chars().count().min(MASK_MAX_LENGTH);
    std::iter::repeat_n(MASK_CHAR, count).collect()
}
