//! JSON ファイル 1 本にマッピング全体を永続化する NoteStorage 実装
//!
//! 元実装の `notes` レコードに対応する。バージョンフィールドは持たない
//! ため、スキーマ変更は後方互換で行う（ファイル不在＝ノート無し）。

use crate::domain::NoteMap;
use crate::ports::outbound::NoteStorage;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// notes.json へマッピング全体を読み書きする NoteStorage 実装
pub struct FileNoteStorage {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileNoteStorage {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// tmp へ書いてから rename で置き換える。途中で失敗しても旧ファイルが残る。
    fn write_atomic(&self, contents: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        self.fs.write(&tmp, contents)?;
        self.fs.rename(&tmp, &self.path)
    }
}

impl NoteStorage for FileNoteStorage {
    fn init(&self) -> Result<(), Error> {
        if !self.fs.exists(&self.path) {
            self.save(&NoteMap::new())?;
        }
        Ok(())
    }

    fn load(&self) -> Result<NoteMap, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(NoteMap::new());
        }
        let s = self.fs.read_to_string(&self.path)?;
        serde_json::from_str(&s).map_err(|e| {
            Error::Json(format!("parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, map: &NoteMap) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(map).map_err(|e| Error::Json(e.to_string()))?;
        self.write_atomic(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Note;
    use common::adapter::StdFileSystem;

    fn storage(dir: &Path) -> FileNoteStorage {
        FileNoteStorage::new(Arc::new(StdFileSystem), dir.join("notes.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let st = storage(dir.path());
        assert!(st.load().unwrap().is_empty());
    }

    #[test]
    fn test_init_creates_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let st = storage(dir.path());
        st.init().unwrap();
        let contents = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
        assert_eq!(contents.trim(), "{}");
        // 再初期化しても既存レコードは潰さない
        let mut map = NoteMap::new();
        map.insert("example.com".to_string(), vec![Note::new("QQ==", 1, "example.com")]);
        st.save(&map).unwrap();
        st.init().unwrap();
        assert_eq!(st.load().unwrap(), map);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let st = storage(dir.path());
        let mut map = NoteMap::new();
        map.insert(
            "a.example.com".to_string(),
            vec![
                Note::new("SA==", 10, "a.example.com"),
                Note::new("SQ==", 20, "a.example.com"),
            ],
        );
        st.save(&map).unwrap();
        assert_eq!(st.load().unwrap(), map);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let st = storage(dir.path());
        st.save(&NoteMap::new()).unwrap();
        assert!(!dir.path().join("notes.json.tmp").exists());
        assert!(dir.path().join("notes.json").exists());
    }

    #[test]
    fn test_load_corrupt_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.json"), "{not json").unwrap();
        let st = storage(dir.path());
        assert!(matches!(st.load(), Err(Error::Json(_))));
    }
}
