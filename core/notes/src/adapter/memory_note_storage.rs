//! テスト用のメモリ内 NoteStorage 実装

use crate::domain::NoteMap;
use crate::ports::outbound::NoteStorage;
use common::error::Error;
use std::sync::Mutex;

/// マッピングをメモリ上に持つ NoteStorage 実装（テスト用の注入先）
#[derive(Debug, Default)]
pub struct MemoryNoteStorage {
    map: Mutex<NoteMap>,
}

impl MemoryNoteStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期状態を指定して生成
    pub fn with_map(map: NoteMap) -> Self {
        Self {
            map: Mutex::new(map),
        }
    }
}

impl NoteStorage for MemoryNoteStorage {
    fn load(&self) -> Result<NoteMap, Error> {
        let guard = self.map.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, map: &NoteMap) -> Result<(), Error> {
        let mut guard = self.map.lock().unwrap_or_else(|e| e.into_inner());
        *guard = map.clone();
        Ok(())
    }
}
