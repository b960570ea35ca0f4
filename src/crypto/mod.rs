//! Cryptographic operations for LocalPass
//!
//! Secure randomness, PBKDF2-HMAC-SHA256 key derivation and AES-256-GCM
//! sealing of vault export envelopes. Derived keys never leave this module.

mod aead;
mod envelope;
mod kdf;
pub mod random;

pub use aead::{NONCE_LENGTH, TAG_LENGTH};
pub use envelope::{open_vault, seal_vault, seal_vault_with, EncryptedEnvelope};
pub use kdf::{KEY_LENGTH, SALT_LENGTH};
pub use random::{OsRandom, SecureRandom};
