//! Label search

use super::collection::Vault;
use super::models::VaultEntry;
use super::store::EntryStore;

/// Check if a string contains the search phrase (case-insensitive)
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.to_lowercase().contains(&phrase.to_lowercase())
}

impl<S: EntryStore> Vault<S> {
    /// Entries whose label contains `query`, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&VaultEntry> {
        self.entries
            .iter()
            .filter(|e| contains_phrase(&e.label, query))
            .collect()
    }
}
