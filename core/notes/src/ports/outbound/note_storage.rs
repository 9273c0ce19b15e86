//! ノートマッピング永続化の Outbound ポート
//!
//! usecase はこの trait 経由でのみ永続化層に触れる。差分更新の
//! プリミティブは無く、常にマッピング全体の読み書きを行う。

use crate::domain::NoteMap;
use common::error::Error;

/// ノートマッピングの永続化抽象（Outbound ポート）
///
/// 実装は `adapter::FileNoteStorage`（JSON ファイル 1 本）や
/// テスト用の `adapter::MemoryNoteStorage` など。
pub trait NoteStorage: Send + Sync {
    /// 初回起動時の初期化。レコードが無ければ空のマッピングを作る。
    fn init(&self) -> Result<(), Error> {
        Ok(())
    }

    /// マッピング全体を読み込む。レコードが無ければ空を返す
    /// （キーの不在は常に「ノート無し」であり、エラーではない）。
    fn load(&self) -> Result<NoteMap, Error>;

    /// マッピング全体を書き戻す。全量置換であり、部分書き込みは
    /// 観測されない（all-or-nothing）。
    fn save(&self, map: &NoteMap) -> Result<(), Error>;
}
