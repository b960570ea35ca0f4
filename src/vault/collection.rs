//! Main Vault API
//!
//! Holds the entry list in memory and writes it through its [`EntryStore`]
//! after every change. Newest entries come first.

use tracing::debug;

use super::models::{normalize_label, VaultEntry};
use super::store::EntryStore;
use crate::error::{LocalPassError, Result};

/// Entry collection backed by a store
pub struct Vault<S: EntryStore> {
    /// Persistence backend
    pub(crate) store: S,
    /// Entries, newest first
    pub(crate) entries: Vec<VaultEntry>,
}

impl<S: EntryStore> Vault<S> {
    /// Open a vault with whatever `store` currently holds
    pub fn load(store: S) -> Result<Self> {
        let entries = store.load()?;
        Ok(Self { store, entries })
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[VaultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by ID
    pub fn get(&self, id: &str) -> Option<&VaultEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Save a password as a new entry at the front of the list
    pub fn add_entry(&mut self, label: &str, password: &str) -> Result<&VaultEntry> {
        if password.is_empty() {
            return Err(LocalPassError::InvalidArgument(
                "generate a password first".to_string(),
            ));
        }

        self.entries.insert(0, VaultEntry::new(label, password));
        self.persist()?;
        debug!(count = self.entries.len(), "added vault entry");
        Ok(&self.entries[0])
    }

    /// Delete an entry
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Err(LocalPassError::EntryNotFound(id.to_string()));
        }
        self.persist()
    }

    /// Rename an entry; an empty label becomes the default label
    pub fn update_label(&mut self, id: &str, label: &str) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| LocalPassError::EntryNotFound(id.to_string()))?;
        entry.label = normalize_label(label);
        self.persist()
    }

    /// Remove every entry
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    /// Give back the store
    pub fn into_store(self) -> S {
        self.store
    }

    pub(crate) fn persist(&mut self) -> Result<()> {
        self.store.store(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::MemoryStore;
    use crate::DEFAULT_ENTRY_LABEL;

    fn empty_vault() -> Vault<MemoryStore> {
        Vault::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_add_entry_prepends_and_persists() {
        let mut vault = empty_vault();
        vault.add_entry("First", "a").unwrap();
        vault.add_entry("Second", "b").unwrap();

        assert_eq!(vault.len(), 2);
        assert_eq!(vault.entries()[0].label, "Second");
        assert_eq!(vault.entries()[1].label, "First");

        let store = vault.into_store();
        assert_eq!(store.entries().len(), 2);
        assert_eq!(store.entries()[0].label, "Second");
    }

    #[test]
    fn test_add_entry_default_label() {
        let mut vault = empty_vault();
        let entry = vault.add_entry("", "secret").unwrap();
        assert_eq!(entry.label, DEFAULT_ENTRY_LABEL);
    }

    #[test]
    fn test_add_entry_requires_password() {
        let mut vault = empty_vault();
        assert!(matches!(
            vault.add_entry("Mail", ""),
            Err(LocalPassError::InvalidArgument(_))
        ));
        assert!(vault.is_empty());
    }

    #[test]
    fn test_delete_entry() {
        let mut vault = empty_vault();
        let id = vault.add_entry("Mail", "x").unwrap().id.clone();
        vault.add_entry("Bank", "y").unwrap();

        vault.delete_entry(&id).unwrap();
        assert_eq!(vault.len(), 1);
        assert!(vault.get(&id).is_none());

        assert!(matches!(
            vault.delete_entry(&id),
            Err(LocalPassError::EntryNotFound(_))
        ));
    }

    #[test]
    fn test_update_label() {
        let mut vault = empty_vault();
        let id = vault.add_entry("Mail", "x").unwrap().id.clone();

        vault.update_label(&id, "Work mail").unwrap();
        assert_eq!(vault.get(&id).unwrap().label, "Work mail");

        vault.update_label(&id, "").unwrap();
        assert_eq!(vault.get(&id).unwrap().label, DEFAULT_ENTRY_LABEL);

        assert!(vault.update_label("missing", "x").is_err());
    }

    #[test]
    fn test_clear() {
        let mut vault = empty_vault();
        vault.add_entry("Mail", "x").unwrap();
        vault.clear().unwrap();
        assert!(vault.is_empty());
        assert!(vault.into_store().entries().is_empty());
    }

    #[test]
    fn test_load_existing_entries() {
        let store = MemoryStore::with_entries(vec![VaultEntry::new("Mail", "x")]);
        let vault = Vault::load(store).unwrap();
        assert_eq!(vault.len(), 1);
    }
}
