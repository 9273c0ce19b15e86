//! 復号済み本文に対する部分一致検索
//!
//! フィルタ結果には元の列内 index を必ず保持する。後続の更新・削除は
//! ストア上の index を要求するため、フィルタ後の位置では呼べない。

use crate::codec;
use crate::domain::Note;

/// 検索ヒット 1 件。`index` は元の列内での位置（ストア操作にそのまま使える）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMatch {
    pub index: usize,
    pub note: Note,
    /// 復号済み本文（破損時は番兵値）
    pub decoded: String,
}

/// 検索語で絞り込む。検索語は trim + 小文字化し、空なら全件を返す。
///
/// 比較は復号済み本文の小文字化に対する部分一致。破損ノートは番兵値に
/// 復号されるので、番兵値そのものが比較対象になる（元実装と同じ挙動）。
///
/// 0 件ヒットと「ノートが 1 件も無い」は表示側で区別する必要がある。
/// 入力が空なら出力も空なので、入力長で判別できる。
pub fn search_notes(notes: &[Note], term: &str) -> Vec<NoteMatch> {
    let needle = term.trim().to_lowercase();
    notes
        .iter()
        .enumerate()
        .filter_map(|(index, note)| {
            let decoded = codec::decode(&note.content);
            if needle.is_empty() || decoded.to_lowercase().contains(&needle) {
                Some(NoteMatch {
                    index,
                    note: note.clone(),
                    decoded,
                })
            } else {
                None
            }
        })
        .collect()
}
