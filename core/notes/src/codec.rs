//! ノート本文の難読化コーデック
//!
//! Caesar シフト + Base64 による可逆変換。暗号化ではなく、ストレージを
//! 開いた人が即座に平文を読めないようにするだけの難読化。シフト量と
//! 手順を知っていれば誰でも復元できるため、機密性の境界として
//! 扱ってはならない。
//!
//! 手順（encode）: percent エンコードで ASCII に落とす → 各バイトに
//! 固定シフトを加算 → Base64。decode は逆順。percent エンコードを挟む
//! のは、シフトが数値コード単位の操作でありマルチバイト文字に直接
//! 適用すると壊れるため。

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Caesar シフト量
pub const CIPHER_SHIFT: u8 = 7;

/// 平文の最大文字数（Unicode スカラー値で数える）
pub const MAX_NOTE_CHARS: usize = 10_000;

/// 復号失敗時に返す番兵値。呼び出し元はこの値をそのまま表示する。
pub const CORRUPTED_SENTINEL: &str = "[Corrupted note data]";

/// `encodeURIComponent` と同じエスケープ集合
/// （英数字と `- _ . ! ~ * ' ( )` 以外をエスケープ）
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 平文を難読化する。空文字・最大長超過は None。
///
/// 鍵も乱数も無く決定的: 同じ平文は常に同じ出力になる。
pub fn encode(text: &str) -> Option<String> {
    if text.is_empty() || text.chars().count() > MAX_NOTE_CHARS {
        return None;
    }
    let escaped = utf8_percent_encode(text, URI_COMPONENT).to_string();
    // escaped は ASCII のみ（最大 0x7E）なのでシフトしても溢れない
    let shifted: Vec<u8> = escaped.bytes().map(|b| b + CIPHER_SHIFT).collect();
    Some(BASE64.encode(shifted))
}

/// 難読化された本文を平文へ戻す。
///
/// 失敗（不正な Base64、シフト範囲外のバイト、不正な percent
/// エンコード、不正な UTF-8）はエラーにせず [`CORRUPTED_SENTINEL`] を
/// 返す。呼び出し元は番兵値をユーザーに見せることで「データはあるが
/// 読めない」ことを伝える。
pub fn decode(encoded: &str) -> String {
    match decode_checked(encoded) {
        Some(text) => text,
        None => CORRUPTED_SENTINEL.to_string(),
    }
}

/// decode の失敗を None で返す版。境界 API のバリデーションで
/// 「復号可能か」を判定するために使う。
pub fn decode_checked(encoded: &str) -> Option<String> {
    let raw = BASE64.decode(encoded).ok()?;
    let mut escaped = Vec::with_capacity(raw.len());
    for b in raw {
        escaped.push(b.checked_sub(CIPHER_SHIFT)?);
    }
    percent_decode_strict(&escaped)
}

/// `%` の後に 16 進 2 桁が続かない入力を失敗として扱う percent デコード。
/// （percent-encoding クレートの decode は不正な `%` をそのまま通すため、
/// 破損検出にはここで厳密に判定する）
fn percent_decode_strict(escaped: &[u8]) -> Option<String> {
    let mut out = Vec::with_capacity(escaped.len());
    let mut i = 0;
    while i < escaped.len() {
        let b = escaped[i];
        if b == b'%' {
            let hi = hex_val(*escaped.get(i + 1)?)?;
            let lo = hex_val(*escaped.get(i + 2)?)?;
            out.push(hi * 16 + lo);
            i += 3;
        } else {
            out.push(b);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
