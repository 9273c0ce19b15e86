//! ノートストア: domain → ノート列の追加・一覧・更新・削除
//!
//! 全操作がマッピング全体の read-modify-write。並行に走らせると
//! lost-update になるため、内部 Mutex で操作単位に直列化する
//! （マッピングは 1 レコードで永続化されるので、ドメイン単位の
//! ロックでは不十分）。

use crate::codec;
use crate::domain::{Note, NoteMap, MAX_NOTES_PER_DOMAIN};
use crate::ports::outbound::NoteStorage;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Clock, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// ストア操作のエラー（境界 API では構造化失敗として返し、例外にはしない）
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("domain is required")]
    InvalidDomain,
    #[error("{0}")]
    InvalidContent(String),
    #[error("note content exceeds 10000 characters")]
    ContentTooLong,
    #[error("note limit reached (100 notes per domain)")]
    CapacityReached,
    #[error("note index {index} is out of range (0..{len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error(transparent)]
    Storage(#[from] Error),
}

/// ノートストア（永続マッピングの唯一の所有者）
///
/// UI 側が持つ一覧はレンダリング用の一時コピーであり、変更系呼び出しの
/// 後は必ず再取得する前提。
pub struct NoteStore {
    storage: Arc<dyn NoteStorage>,
    clock: Arc<dyn Clock>,
    log: Option<Arc<dyn Log>>,
    /// 全操作を直列化する single-writer ロック
    guard: Mutex<()>,
}

impl NoteStore {
    pub fn new(
        storage: Arc<dyn NoteStorage>,
        clock: Arc<dyn Clock>,
        log: Option<Arc<dyn Log>>,
    ) -> Self {
        Self {
            storage,
            clock,
            log,
            guard: Mutex::new(()),
        }
    }

    /// 平文ノートを追加する。エンコードしてから末尾へ追記し、
    /// マッピング全体を書き戻す。成功時のペイロードは無し
    /// （反映を見るには再度 list する）。
    pub fn add_note(&self, domain: &str, plaintext: &str) -> Result<(), StoreError> {
        validate_domain(domain)?;
        validate_plaintext(plaintext)?;
        let encoded = codec::encode(plaintext).ok_or_else(|| {
            StoreError::InvalidContent("note content cannot be encoded".to_string())
        })?;
        let timestamp = self.clock.now_ms();
        self.append(domain, Note::new(encoded, timestamp, domain), "add")
    }

    /// エンコード済みノートをそのまま追加する（境界 API の saveNote 用。
    /// 本文のバリデーションは境界側で済ませてある前提）。
    pub fn add_encoded_note(&self, domain: &str, note: Note) -> Result<(), StoreError> {
        validate_domain(domain)?;
        self.append(domain, note, "save")
    }

    fn append(&self, domain: &str, note: Note, operation: &str) -> Result<(), StoreError> {
        let _g = self.lock();
        let mut map = self.storage.load()?;
        let existing = map.get(domain).map_or(0, |seq| seq.len());
        if existing >= MAX_NOTES_PER_DOMAIN {
            return Err(StoreError::CapacityReached);
        }
        let seq = map.entry(domain.to_string()).or_default();
        seq.push(note);
        let count = seq.len();
        self.storage.save(&map)?;
        self.log_write(operation, domain, count);
        Ok(())
    }

    /// ドメインのノートを格納順で返す。不在のドメインは空
    /// （内容はエンコードされたまま。復号は表示側で `codec::decode`）。
    pub fn list_notes(&self, domain: &str) -> Result<Vec<Note>, StoreError> {
        let _g = self.lock();
        let mut map = self.storage.load()?;
        Ok(map.remove(domain).unwrap_or_default())
    }

    /// index のノート本文を差し替える。timestamp と domain は変更しない。
    pub fn update_note(
        &self,
        domain: &str,
        index: usize,
        new_plaintext: &str,
    ) -> Result<(), StoreError> {
        validate_domain(domain)?;
        if new_plaintext.trim().is_empty() {
            return Err(StoreError::InvalidContent("note content is empty".to_string()));
        }
        validate_plaintext(new_plaintext)?;
        let encoded = codec::encode(new_plaintext).ok_or_else(|| {
            StoreError::InvalidContent("note content cannot be encoded".to_string())
        })?;
        let _g = self.lock();
        let mut map = self.storage.load()?;
        let seq = seq_mut(&mut map, domain, index)?;
        seq[index].content = encoded;
        self.storage.save(&map)?;
        self.log_write("update", domain, index);
        Ok(())
    }

    /// index のノートを削除する。以降のノートは 1 つ前へ詰まるため、
    /// 呼び出し側は削除をまたいで index をキャッシュしてはならない。
    /// 列が空になったらドメインキーごと取り除く。
    pub fn delete_note(&self, domain: &str, index: usize) -> Result<(), StoreError> {
        validate_domain(domain)?;
        let _g = self.lock();
        let mut map = self.storage.load()?;
        let seq = seq_mut(&mut map, domain, index)?;
        seq.remove(index);
        if seq.is_empty() {
            map.remove(domain);
        }
        self.storage.save(&map)?;
        self.log_write("delete", domain, index);
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.guard.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn log_write(&self, operation: &str, domain: &str, n: usize) {
        if let Some(ref logger) = self.log {
            let mut fields = BTreeMap::new();
            fields.insert("operation".to_string(), serde_json::json!(operation));
            fields.insert("domain".to_string(), serde_json::json!(domain));
            fields.insert("n".to_string(), serde_json::json!(n));
            let _ = logger.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Info,
                message: "notes write".to_string(),
                layer: Some("usecase".to_string()),
                kind: Some("store".to_string()),
                fields: Some(fields),
            });
        }
    }
}

fn validate_domain(domain: &str) -> Result<(), StoreError> {
    if domain.trim().is_empty() {
        return Err(StoreError::InvalidDomain);
    }
    Ok(())
}

fn validate_plaintext(plaintext: &str) -> Result<(), StoreError> {
    if plaintext.trim().is_empty() {
        return Err(StoreError::InvalidContent("note content is empty".to_string()));
    }
    if plaintext.chars().count() > codec::MAX_NOTE_CHARS {
        return Err(StoreError::ContentTooLong);
    }
    Ok(())
}

fn seq_mut<'a>(
    map: &'a mut NoteMap,
    domain: &str,
    index: usize,
) -> Result<&'a mut Vec<Note>, StoreError> {
    let len = map.get(domain).map_or(0, |seq| seq.len());
    if index >= len {
        return Err(StoreError::IndexOutOfBounds { index, len });
    }
    // len > index ≥ 0 なのでキーは必ず存在する
    map.get_mut(domain)
        .ok_or(StoreError::IndexOutOfBounds { index, len: 0 })
}
