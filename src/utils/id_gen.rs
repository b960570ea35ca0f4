//! ID generation utilities

/// Generate a vault entry ID (hyphenated UUID v4, 36 characters)
pub fn generate_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
