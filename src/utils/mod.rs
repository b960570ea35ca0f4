//! Small helpers shared by the vault layer

mod common;
mod id_gen;

pub use common::{mask_password, now, MASK_CHAR, MASK_MAX_LENGTH};
pub use id_gen::generate_entry_id;
