//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。usecase / adapter は `Result<_, Error>` で
//! 呼び出し元へ伝播し、panic はしない。

/// 共通エラー型
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// I/O 失敗（ファイル読み書き・rename 等）
    #[error("{0}")]
    Io(String),
    /// JSON のシリアライズ / デシリアライズ失敗
    #[error("JSON error: {0}")]
    Json(String),
    /// 引数不正
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// I/O エラーをメッセージから生成
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラーをメッセージから生成
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
