//! Data models for vault entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::{generate_entry_id, mask_password, now};
use crate::DEFAULT_ENTRY_LABEL;

/// Saved password entry
///
/// Serialized with camelCase keys (`createdAt`). On read, a numeric `id` is
/// accepted as its decimal string and a missing `createdAt` becomes the load
/// time. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultEntry {
    /// Unique entry ID (UUID v4)
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Display label
    pub label: String,
    /// Stored password
    pub password: String,
    /// Creation timestamp
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
}

impl VaultEntry {
    /// Create an entry with a fresh ID and the current time.
    ///
    /// An empty label becomes [`DEFAULT_ENTRY_LABEL`].
    pub fn new(label: &str, password: &str) -> Self {
        Self {
            id: generate_entry_id(),
            label: normalize_label(label),
            password: password.to_string(),
            created_at: now(),
        }
    }

    /// Password hidden for display
    pub fn masked_password(&self) -> String {
        mask_password(&self.password)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

pub(crate) fn normalize_label(label: &str) -> String {
    if label.is_empty() {
        DEFAULT_ENTRY_LABEL.to_string()
    } else {
        label.to_string()
    }
}
