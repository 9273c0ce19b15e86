//! アダプター（外界の I/O を trait で抽象化した実装）
//!
//! usecase は `ports::outbound` の trait 経由でのみファイル・時刻・ログに触れる。
//! 本番は標準実装（Std* / FileJsonLog）、テストはモックを注入する。

pub mod file_json_log;
pub mod std_clock;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_clock::StdClock;
pub use std_fs::StdFileSystem;
