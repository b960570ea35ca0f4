//! Vault entry collection
//!
//! The entry list, its load/store contract, label search and the
//! export/import paths that go through the sealed envelope codec.

mod collection;
mod models;
mod search;
mod store;
mod transfer;

pub use collection::Vault;
pub use models::VaultEntry;
pub use search::contains_phrase;
pub use store::{EntryStore, JsonFileStore, MemoryStore};
pub use transfer::{
    decrypt_import, export_encrypted, export_plain, parse_import, ImportPayload,
    ENCRYPTED_EXPORT_FILENAME, PLAIN_EXPORT_FILENAME,
};
