//! ノート 1 件のドメイン型と永続化マッピング
//!
//! 元実装の `notes` レコード（domain → ノート配列）と互換のフィールド。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 1 ドメインが保持できるノート数の上限（超過は切り捨てず拒否する）
pub const MAX_NOTES_PER_DOMAIN: usize = 100;

/// ノート 1 件
///
/// `content` は常にコーデックでエンコード済みの文字列（平文は永続化しない）。
/// `timestamp` は作成時のミリ秒（Unix epoch）で、編集しても変わらない。
/// `domain` はマッピングのキーと重複するが、レコード自身にも保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub timestamp: u64,
    pub domain: String,
}

impl Note {
    pub fn new(content: impl Into<String>, timestamp: u64, domain: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            timestamp,
            domain: domain.into(),
        }
    }
}

/// 永続化される全体マッピング（domain → 挿入順のノート列）
///
/// キーが存在する ⇔ ノートが 1 件以上ある。最後の 1 件を削除したら
/// キーごと取り除く。
pub type NoteMap = BTreeMap<String, Vec<Note>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_serde_field_names() {
        // 元実装のストレージ形式と互換であること
        let note = Note::new("U2Vj", 1_700_000_000_000, "example.com");
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"content":"U2Vj","timestamp":1700000000000,"domain":"example.com"}"#
        );
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn test_note_map_round_trip() {
        let mut map = NoteMap::new();
        map.insert(
            "example.com".to_string(),
            vec![Note::new("QQ==", 1, "example.com")],
        );
        let json = serde_json::to_string(&map).unwrap();
        let back: NoteMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
