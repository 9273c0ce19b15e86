//! ノートボールト共通ライブラリ
//!
//! `notes` クレートから利用するエラー型・Outbound ポート・標準アダプターを提供します。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（FS・時刻・ログ）
pub mod ports;

/// 標準アダプター（Std* 実装とログ実装）
pub mod adapter;
