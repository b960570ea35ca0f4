//! # LocalPass Core
//!
//! Password generation, strength estimation and passphrase-sealed vault export.
//!
//! ## Features
//!
//! - Unbiased password generation from the OS CSPRNG (class-based or pronounceable)
//! - Entropy-based strength estimation from the generation options
//! - PBKDF2-HMAC-SHA256 + AES-256-GCM envelopes for vault export/import
//! - Entry collection with a pluggable load/store contract
//! - Offline helpers for k-anonymity breach checks
//!
//! ## Example
//!
//! ```no_run
//! use localpass_core::{generate_password, estimate_strength, seal_vault, open_vault};
//! use localpass_core::{GenerationOptions, KDF_ITERATIONS_DEFAULT};
//!
//! let options = GenerationOptions::default();
//! let password = generate_password(&options).unwrap();
//! let strength = estimate_strength(&password, &options);
//! println!("{} bits ({})", strength.entropy_bits, strength.label);
//!
//! let envelope = seal_vault(&vec![password.clone()], "correct-horse", KDF_ITERATIONS_DEFAULT).unwrap();
//! let restored: Vec<String> = open_vault(&envelope, "correct-horse").unwrap();
//! assert_eq!(restored, vec![password]);
//! ```

pub mod breach;
pub mod crypto;
pub mod error;
pub mod password;
pub mod utils;
pub mod vault;

// Re-export main types
pub use error::{LocalPassError, Result};
pub use crypto::{open_vault, seal_vault, EncryptedEnvelope, OsRandom, SecureRandom};
pub use password::{
    build_charset, estimate_strength, generate_password, GenerationOptions, StrengthLabel,
    StrengthResult,
};
pub use vault::{EntryStore, ImportPayload, JsonFileStore, MemoryStore, Vault, VaultEntry};

/// Minimum generated password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum generated password length
pub const PASSWORD_MAX_LENGTH: usize = 64;

/// Default generated password length
pub const PASSWORD_DEFAULT_LENGTH: usize = 16;

/// Default PBKDF2 iteration count for sealed envelopes
pub const KDF_ITERATIONS_DEFAULT: u32 = 200_000;

/// The only envelope version this build reads and writes
pub const ENVELOPE_VERSION: u32 = 1;

/// Entry file name used by [`JsonFileStore`]
pub const ENTRIES_FILENAME: &str = "localpass_entries_v1.json";

/// Label given to entries saved without one
pub const DEFAULT_ENTRY_LABEL: &str = "Untitled";
