//! ドメイン型

pub mod host;
pub mod note;

pub use host::{extract_domain, UNKNOWN_DOMAIN};
pub use note::{Note, NoteMap, MAX_NOTES_PER_DOMAIN};
