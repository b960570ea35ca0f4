//! Passphrase key derivation
//!
//! PBKDF2-HMAC-SHA256 producing a 256-bit AES key. The key is wrapped in
//! [`Zeroizing`] so it is wiped when the caller drops it.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Key length for AES-256 (32 bytes = 256 bits)
pub const KEY_LENGTH: usize = 32;

/// Salt length drawn for each sealed envelope
pub const SALT_LENGTH: usize = 16;

/// Derive an AES-256 key from `passphrase` and `salt`
pub(crate) fn derive_key(
    passphrase: &str,
    salt: &[u8],
    iterations: u32,
) -> Zeroizing<[u8; KEY_LENGTH]> {
    let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, iterations, &mut key[..]);
    key
}
