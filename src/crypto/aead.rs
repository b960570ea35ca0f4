//! AES-256-GCM encryption and decryption
//!
//! Ciphertext carries the 16-byte GCM tag appended. Every decryption failure
//! collapses into [`LocalPassError::DecryptionFailed`], including a nonce of
//! the wrong length, so callers cannot tell a malformed envelope from a
//! wrong passphrase.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use super::kdf::KEY_LENGTH;
use crate::error::{LocalPassError, Result};

/// Nonce size for AES-GCM (12 bytes = 96 bits)
pub const NONCE_LENGTH: usize = 12;

/// GCM authentication tag size
pub const TAG_LENGTH: usize = 16;

/// Encrypt `plaintext` under `key` and `nonce`
pub(crate) fn encrypt(
    key: &[u8; KEY_LENGTH],
    nonce: &[u8; NONCE_LENGTH],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| LocalPassError::EncryptionError(e.to_string()))
}

/// Decrypt and authenticate `ciphertext`
pub(crate) fn decrypt(key: &[u8; KEY_LENGTH], nonce: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if nonce.len() != NONCE_LENGTH {
        return Err(LocalPassError::DecryptionFailed);
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| LocalPassError::DecryptionFailed)
}
