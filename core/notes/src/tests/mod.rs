//! 結合テスト（配線済み NoteStore に対するフロー検証）

mod boundary_flow_tests;
