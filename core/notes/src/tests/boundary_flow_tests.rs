//! 境界 API 経由でのフロー（UI コラボレーター視点）を検証する

use crate::boundary::{handle_request, ACTION_SAVE_NOTE};
use crate::codec;
use crate::domain::extract_domain;
use crate::wiring::wire_notes;
use serde_json::json;

#[test]
fn test_page_button_save_flow() {
    let dir = tempfile::tempdir().unwrap();
    let store = wire_notes(dir.path()).unwrap();

    // ページ内ボタン側の手順: URL からドメインを取り、本文をエンコード
    // してからメッセージで送る
    let domain = extract_domain("https://shop.example.com/cart");
    let encoded = codec::encode("coupon SAVE10 works here").unwrap();
    let req = json!({
        "action": ACTION_SAVE_NOTE,
        "domain": domain,
        "note": {
            "content": encoded,
            "timestamp": 1_700_000_000_000u64,
            "domain": domain,
        },
    });

    let resp = handle_request(&store, &req);
    assert_eq!(resp, json!({"success": true}));

    // ポップアップ側の手順: list → 表示時に復号
    let notes = store.list_notes("shop.example.com").unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(codec::decode(&notes[0].content), "coupon SAVE10 works here");
}

#[test]
fn test_save_flow_persists_across_rewire() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = wire_notes(dir.path()).unwrap();
        let encoded = codec::encode("note via boundary").unwrap();
        let resp = handle_request(
            &store,
            &json!({
                "action": ACTION_SAVE_NOTE,
                "domain": "example.com",
                "note": {"content": encoded, "timestamp": 1u64, "domain": "example.com"},
            }),
        );
        assert_eq!(resp["success"], true);
    }
    let store = wire_notes(dir.path()).unwrap();
    assert_eq!(store.list_notes("example.com").unwrap().len(), 1);
}

#[test]
fn test_failure_responses_do_not_touch_storage() {
    let dir = tempfile::tempdir().unwrap();
    let store = wire_notes(dir.path()).unwrap();

    let before = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    let resp = handle_request(&store, &json!({"action": "somethingElse"}));
    assert_eq!(resp["success"], false);
    let after = std::fs::read_to_string(dir.path().join("notes.json")).unwrap();
    assert_eq!(before, after);
}
