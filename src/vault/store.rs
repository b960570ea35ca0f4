//! Load/store contract for the entry list
//!
//! The vault persists its whole entry array after every change. Stores only
//! move plaintext arrays in and out; encryption happens at export time.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::models::VaultEntry;
use crate::error::Result;
use crate::ENTRIES_FILENAME;

/// Persistence backend for [`super::Vault`]
pub trait EntryStore {
    /// Load every saved entry
    fn load(&self) -> Result<Vec<VaultEntry>>;

    /// Replace the saved entries
    fn store(&mut self, entries: &[VaultEntry]) -> Result<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<VaultEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`
    pub fn with_entries(entries: Vec<VaultEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }
}

impl EntryStore for MemoryStore {
    fn load(&self) -> Result<Vec<VaultEntry>> {
        Ok(self.entries.clone())
    }

    fn store(&mut self, entries: &[VaultEntry]) -> Result<()> {
        self.entries = entries.to_vec();
        Ok(())
    }
}

/// JSON array kept in [`ENTRIES_FILENAME`] inside a folder
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted at `folder`; the folder is created on first write
    pub fn new(folder: &Path) -> Self {
        Self {
            path: folder.join(ENTRIES_FILENAME),
        }
    }

    /// Path of the entries file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for JsonFileStore {
    /// A missing file loads as empty. So does a file that is not a valid entry
    /// array, invalid UTF-8 included; the next write replaces it.
    fn load(&self) -> Result<Vec<VaultEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)?;
        match serde_json::from_slice::<Vec<VaultEntry>>(&bytes) {
            Ok(entries) => {
                debug!(count = entries.len(), "loaded vault entries");
                Ok(entries)
            }
            Err(e) => {
                warn!(path = %self.path.display(), line = e.line(), "unreadable entries file, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn store(&mut self, entries: &[VaultEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let text = serde_json::to_string(entries)?;
        fs::write(&self.path, text)?;
        debug!(count = entries.len(), "stored vault entries");
        Ok(())
    }
}
