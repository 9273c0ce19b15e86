//! 配線: 標準アダプタで NoteStore を組み立てる

use std::path::Path;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdFileSystem};
use common::error::Error;
use common::ports::outbound::{FileSystem, Log};

use crate::adapter::FileNoteStorage;
use crate::ports::outbound::NoteStorage;
use crate::usecase::store::NoteStore;

/// data_dir 配下に notes.json と logs/notes.jsonl を置く構成で
/// NoteStore を組み立てる。初回起動時は空のレコードを作る。
pub fn wire_notes(data_dir: &Path) -> Result<NoteStore, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let storage = Arc::new(FileNoteStorage::new(
        Arc::clone(&fs),
        data_dir.join("notes.json"),
    ));
    storage.init()?;
    let log: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        data_dir.join("logs").join("notes.jsonl"),
    ));
    Ok(NoteStore::new(storage, Arc::new(StdClock), Some(log)))
}
