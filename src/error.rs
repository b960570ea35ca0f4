//! Error types for LocalPass Core

use thiserror::Error;

/// Main error type for generator, codec and vault operations
#[derive(Error, Debug)]
pub enum LocalPassError {
    /// Class-based generation was requested with every class disabled
    #[error("No character class selected")]
    NoCharacterClass,

    /// The operating system CSPRNG could not be read
    #[error("Secure random source unavailable: {0}")]
    RandomUnavailable(String),

    /// Envelope carries a version this build does not understand
    #[error("Unsupported envelope version: {0}")]
    UnsupportedEnvelope(u32),

    /// Authentication failed: wrong passphrase or tampered envelope
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Encryption failed
    #[error("Encryption error: {0}")]
    EncryptionError(String),

    /// Malformed envelope, import file or payload
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Argument outside the accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entry not found
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Breach range lookup failed
    #[error("Breach lookup failed: {0}")]
    LookupFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for LocalPassError {
    fn from(err: serde_json::Error) -> Self {
        LocalPassError::InvalidFormat(err.to_string())
    }
}

/// Result type alias for LocalPass operations
pub type Result<T> = std::result::Result<T, LocalPassError>;
