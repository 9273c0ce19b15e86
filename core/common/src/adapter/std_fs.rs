//! 標準ファイルシステム実装（std::fs を委譲）

use crate::error::Error;
use crate::ports::outbound::{FileMetadata, FileSystem};
use std::path::Path;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        std::fs::read_to_string(path).map_err(|e| {
            Error::io_msg(format!("Failed to read '{}': {}", path.display(), e))
        })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        std::fs::write(path, contents).map_err(|e| {
            Error::io_msg(format!("Failed to write '{}': {}", path.display(), e))
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        std::fs::rename(from, to).map_err(|e| {
            Error::io_msg(format!(
                "Failed to rename '{}' to '{}': {}",
                from.display(),
                to.display(),
                e
            ))
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Error> {
        std::fs::create_dir_all(path).map_err(|e| {
            Error::io_msg(format!("Failed to create directory '{}': {}", path.display(), e))
        })
    }

    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error> {
        let m = std::fs::metadata(path).map_err(|e| {
            Error::io_msg(format!(
                "Failed to get metadata for '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(FileMetadata::new(m.len(), m.is_file(), m.is_dir()))
    }

    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error> {
        let f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                Error::io_msg(format!("Failed to open '{}' for append: {}", path.display(), e))
            })?;
        Ok(Box::new(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_rename() {
        let dir = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");

        fs.write(&a, "hello").unwrap();
        assert_eq!(fs.read_to_string(&a).unwrap(), "hello");
        let meta = fs.metadata(&a).unwrap();
        assert!(meta.is_file());
        assert_eq!(meta.len(), 5);

        fs.rename(&a, &b).unwrap();
        assert!(!fs.exists(&a));
        assert_eq!(fs.read_to_string(&b).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let r = fs.read_to_string(&dir.path().join("missing.txt"));
        assert!(matches!(r, Err(Error::Io(_))));
    }

    #[test]
    fn test_open_append_appends() {
        let dir = tempfile::tempdir().unwrap();
        let fs = StdFileSystem;
        let p = dir.path().join("log.jsonl");
        {
            let mut w = fs.open_append(&p).unwrap();
            use std::io::Write;
            w.write_all(b"one\n").unwrap();
        }
        {
            let mut w = fs.open_append(&p).unwrap();
            use std::io::Write;
            w.write_all(b"two\n").unwrap();
        }
        assert_eq!(fs.read_to_string(&p).unwrap(), "one\ntwo\n");
    }
}
