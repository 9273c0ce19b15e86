//! Outbound ポート: ノートマッピングの永続化

pub mod note_storage;

pub use note_storage::NoteStorage;
