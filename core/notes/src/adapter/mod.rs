//! アダプター（NoteStorage ポートの実装）

pub mod file_note_storage;
pub mod memory_note_storage;

pub use file_note_storage::FileNoteStorage;
pub use memory_note_storage::MemoryNoteStorage;
