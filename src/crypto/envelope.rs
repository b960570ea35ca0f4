//! Sealed vault envelopes
//!
//! An envelope is a self-describing JSON object:
//!
//! ```json
//! { "v": 1, "iter": 200000, "salt": [..16 bytes..], "iv": [..12 bytes..], "ct": [..] }
//! ```
//!
//! `ct` is the AES-256-GCM ciphertext (tag appended) of the payload's JSON
//! text, under a PBKDF2-HMAC-SHA256 key derived from the passphrase, `salt`
//! and `iter`. Salt and nonce are drawn fresh for every seal.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::aead::{self, NONCE_LENGTH};
use super::kdf::{derive_key, SALT_LENGTH};
use super::random::{OsRandom, SecureRandom};
use crate::error::{LocalPassError, Result};
use crate::{ENVELOPE_VERSION, KDF_ITERATIONS_DEFAULT};

/// Encrypted, versioned container for an exported payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Format version, must equal [`ENVELOPE_VERSION`]
    #[serde(rename = "v")]
    pub version: u32,
    /// PBKDF2 iteration count; zero or missing means the default
    #[serde(rename = "iter", default)]
    pub iterations: u32,
    /// KDF salt
    pub salt: Vec<u8>,
    /// AES-GCM nonce
    #[serde(rename = "iv")]
    pub nonce: Vec<u8>,
    /// Ciphertext with authentication tag
    #[serde(rename = "ct")]
    pub ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Serialize to the wire JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the wire JSON object.
    ///
    /// Byte values outside 0-255 or missing fields are format errors.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Iteration count `open_vault` will use
    pub fn effective_iterations(&self) -> u32 {
        if self.iterations == 0 {
            KDF_ITERATIONS_DEFAULT
        } else {
            self.iterations
        }
    }
}

/// Seal `payload` under `passphrase` using the OS random source.
///
/// # Example
/// ```
/// use localpass_core::{open_vault, seal_vault};
///
/// let envelope = seal_vault(&["a", "b"], "correct-horse", 1_000).unwrap();
/// let restored: Vec<String> = open_vault(&envelope, "correct-horse").unwrap();
/// assert_eq!(restored, vec!["a", "b"]);
/// ```
pub fn seal_vault<T>(payload: &T, passphrase: &str, iterations: u32) -> Result<EncryptedEnvelope>
where
    T: Serialize + ?Sized,
{
    seal_vault_with(&mut OsRandom, payload, passphrase, iterations)
}

/// Seal `payload` drawing salt and nonce from `rng`
pub fn seal_vault_with<R, T>(
    rng: &mut R,
    payload: &T,
    passphrase: &str,
    iterations: u32,
) -> Result<EncryptedEnvelope>
where
    R: SecureRandom + ?Sized,
    T: Serialize + ?Sized,
{
    if iterations == 0 {
        return Err(LocalPassError::InvalidArgument(
            "iteration count must be positive".to_string(),
        ));
    }

    let mut salt = [0u8; SALT_LENGTH];
    let mut nonce = [0u8; NONCE_LENGTH];
    rng.fill_bytes(&mut salt)?;
    rng.fill_bytes(&mut nonce)?;

    let key = derive_key(passphrase, &salt, iterations);
    let plaintext = Zeroizing::new(serde_json::to_vec(payload)?);
    let ciphertext = aead::encrypt(&key, &nonce, &plaintext)?;

    debug!(iterations, ciphertext_len = ciphertext.len(), "sealed vault envelope");

    Ok(EncryptedEnvelope {
        version: ENVELOPE_VERSION,
        iterations,
        salt: salt.to_vec(),
        nonce: nonce.to_vec(),
        ciphertext,
    })
}

/// Open an envelope sealed by [`seal_vault`].
///
/// Fails with [`LocalPassError::UnsupportedEnvelope`] for unknown versions and
/// with [`LocalPassError::DecryptionFailed`] for a wrong passphrase or any
/// tampering. Never retries.
pub fn open_vault<T: DeserializeOwned>(envelope: &EncryptedEnvelope, passphrase: &str) -> Result<T> {
    if envelope.version != ENVELOPE_VERSION {
        return Err(LocalPassError::UnsupportedEnvelope(envelope.version));
    }

    let iterations = envelope.effective_iterations();
    let key = derive_key(passphrase, &envelope.salt, iterations);
    let plaintext = match aead::decrypt(&key, &envelope.nonce, &envelope.ciphertext) {
        Ok(plaintext) => Zeroizing::new(plaintext),
        Err(err) => {
            debug!(iterations, "vault envelope failed authentication");
            return Err(err);
        }
    };

    debug!(iterations, plaintext_len = plaintext.len(), "opened vault envelope");

    // serde_json messages can quote payload fragments, keep only the position
    serde_json::from_slice(&plaintext).map_err(|e| {
        LocalPassError::InvalidFormat(format!(
            "decrypted payload has unexpected shape (line {}, column {})",
            e.line(),
            e.column()
        ))
    })
}
