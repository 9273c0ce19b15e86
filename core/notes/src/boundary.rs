//! メッセージ境界 API
//!
//! UI 側コラボレーター（ポップアップ・ページ内ボタン）はこの JSON
//! メッセージ経由でストアを呼ぶ。失敗は必ず `{"success": false,
//! "error": ...}` の構造化レスポンスで返し、呼び出し側へ fault を
//! 伝播させない。認識できないリクエストも黙殺せず invalid-format で
//! 応答する。

use crate::codec;
use crate::domain::Note;
use crate::usecase::store::{NoteStore, StoreError};
use serde_json::{json, Value};

/// エンコード済みノートを 1 件保存するアクション
pub const ACTION_SAVE_NOTE: &str = "saveNote";

/// ポップアップ起動要求（ホスト側の制約で常に失敗応答を返す）
pub const ACTION_OPEN_POPUP: &str = "openPopup";

/// リクエスト 1 件を処理してレスポンス JSON を返す
pub fn handle_request(store: &NoteStore, request: &Value) -> Value {
    let Some(action) = request.get("action").and_then(|v| v.as_str()) else {
        return invalid_format();
    };
    match action {
        ACTION_SAVE_NOTE => handle_save_note(store, request),
        ACTION_OPEN_POPUP => json!({
            "success": false,
            "message": "Cannot open popup programmatically",
        }),
        _ => invalid_format(),
    }
}

fn handle_save_note(store: &NoteStore, request: &Value) -> Value {
    let domain = match request.get("domain").and_then(|v| v.as_str()) {
        Some(d) if !d.trim().is_empty() => d,
        _ => return failure(&StoreError::InvalidDomain.to_string()),
    };
    let Some(note) = request.get("note").and_then(|v| v.as_object()) else {
        return failure("invalid note format");
    };
    let Some(content) = note.get("content").and_then(|v| v.as_str()) else {
        return failure("invalid note format");
    };
    let Some(timestamp) = note.get("timestamp").and_then(|v| v.as_u64()) else {
        return failure("invalid note format");
    };

    // content は送信側でエンコード済み。復号できない本文は受け付けない。
    let Some(plaintext) = codec::decode_checked(content) else {
        return failure("invalid note format");
    };
    if plaintext.chars().count() > codec::MAX_NOTE_CHARS {
        return failure(&StoreError::ContentTooLong.to_string());
    }

    let record_domain = note
        .get("domain")
        .and_then(|v| v.as_str())
        .unwrap_or(domain);
    let record = Note::new(content, timestamp, record_domain);
    match store.add_encoded_note(domain, record) {
        Ok(()) => json!({ "success": true }),
        Err(e) => failure(&e.to_string()),
    }
}

fn failure(error: &str) -> Value {
    json!({ "success": false, "error": error })
}

fn invalid_format() -> Value {
    failure("invalid request format")
}
