//! 時刻取得の Outbound ポート
//!
//! ノートの作成時刻（timestamp）はこの trait 経由でのみ取得する。
//! テストでは固定時刻の実装を注入できる。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
