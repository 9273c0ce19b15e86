//! ドメイン別ノートボールト
//!
//! 閲覧中ページのドメイン（ホスト名）をキーに短いテキストノートを
//! ローカル保存するライブラリ。ノート本文は難読化コーデック
//! （[`codec`]）を通してから永続化し、読み出し時に復号する。
//! UI 側コラボレーターは [`boundary`] のメッセージ API か
//! [`usecase::store::NoteStore`] を直接呼ぶ。

/// 難読化コーデック（シフト + Base64。暗号ではない）
pub mod codec;

/// ドメイン型（Note・ホスト名抽出）
pub mod domain;

/// Outbound ポート（永続化）
pub mod ports;

/// アダプター（ファイル永続化・テスト用メモリ永続化）
pub mod adapter;

/// ユースケース（ノートストア・検索）
pub mod usecase;

/// メッセージ境界 API（UI コラボレーター向け）
pub mod boundary;

/// 配線: 標準アダプタで NoteStore を組み立てる
pub mod wiring;

#[cfg(test)]
mod tests;
