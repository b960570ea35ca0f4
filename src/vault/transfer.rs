//! Export and import of the entry list
//!
//! Exports are either the plain entry array or a sealed envelope around it.
//! On import, a JSON object with `v == 1` and a `ct` field is treated as an
//! envelope; anything else must be a plain entry array.
//!
//! Each imported element needs `id`, `label` and `password`. A numeric `id`
//! is kept as its decimal string, a missing `createdAt` becomes the import
//! time, and fields outside [`VaultEntry`] are dropped. Any other element
//! shape fails the whole import with "Invalid entry data".

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use super::collection::Vault;
use super::models::VaultEntry;
use super::store::EntryStore;
use crate::crypto::{open_vault, seal_vault, EncryptedEnvelope};
use crate::error::{LocalPassError, Result};
use crate::ENVELOPE_VERSION;

/// Suggested file name for plain exports
pub const PLAIN_EXPORT_FILENAME: &str = "localpass.json";

/// Suggested file name for encrypted exports
pub const ENCRYPTED_EXPORT_FILENAME: &str = "localpass_encrypted.json";

/// Parsed import file
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPayload {
    /// Unencrypted entry array
    Plain(Vec<VaultEntry>),
    /// Envelope that still needs a passphrase
    Encrypted(EncryptedEnvelope),
}

/// Serialize entries as a plain JSON array
pub fn export_plain(entries: &[VaultEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Seal entries under `passphrase` and serialize the envelope
pub fn export_encrypted(entries: &[VaultEntry], passphrase: &str, iterations: u32) -> Result<String> {
    let envelope = seal_vault(entries, passphrase, iterations)?;
    envelope.to_json()
}

/// Parse an import file, detecting encrypted envelopes
pub fn parse_import(text: &str) -> Result<ImportPayload> {
    let value: Value = serde_json::from_str(text)
        .map_err(|_| LocalPassError::InvalidFormat("Invalid file format".to_string()))?;

    if is_envelope(&value) {
        let envelope = serde_json::from_value(value)
            .map_err(|_| LocalPassError::InvalidFormat("Invalid file format".to_string()))?;
        debug!("import file is an encrypted envelope");
        return Ok(ImportPayload::Encrypted(envelope));
    }

    entries_from_value(value).map(ImportPayload::Plain)
}

/// Open an imported envelope and read its entry array
pub fn decrypt_import(envelope: &EncryptedEnvelope, passphrase: &str) -> Result<Vec<VaultEntry>> {
    let value: Value = open_vault(envelope, passphrase)?;
    entries_from_value(value)
}

fn is_envelope(value: &Value) -> bool {
    value.get("v").and_then(Value::as_u64) == Some(u64::from(ENVELOPE_VERSION))
        && value.get("ct").is_some_and(|ct| !ct.is_null())
}

fn entries_from_value(value: Value) -> Result<Vec<VaultEntry>> {
    if !value.is_array() {
        return Err(LocalPassError::InvalidFormat(
            "Import expects an array".to_string(),
        ));
    }
    // serde_json messages can quote entry fields, passwords included
    serde_json::from_value(value)
        .map_err(|_| LocalPassError::InvalidFormat("Invalid entry data".to_string()))
}

impl<S: EntryStore> Vault<S> {
    /// Plain JSON export of every entry
    pub fn export_plain(&self) -> Result<String> {
        export_plain(&self.entries)
    }

    /// Encrypted export of every entry
    pub fn export_encrypted(&self, passphrase: &str, iterations: u32) -> Result<String> {
        export_encrypted(&self.entries, passphrase, iterations)
    }

    /// Merge imported entries, skipping IDs already present.
    ///
    /// New entries go before the existing ones. Returns how many were added.
    pub fn merge_import(&mut self, imported: Vec<VaultEntry>) -> Result<usize> {
        let existing: HashSet<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        let total = imported.len();
        let mut merged: Vec<VaultEntry> = imported
            .into_iter()
            .filter(|e| !existing.contains(e.id.as_str()))
            .collect();
        let added = merged.len();

        merged.append(&mut self.entries);
        self.entries = merged;
        self.persist()?;

        debug!(added, skipped = total - added, "merged imported entries");
        Ok(added)
    }
}
