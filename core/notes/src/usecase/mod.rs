//! ユースケース

pub mod search;
pub mod store;

pub use search::{search_notes, NoteMatch};
pub use store::{NoteStore, StoreError};
