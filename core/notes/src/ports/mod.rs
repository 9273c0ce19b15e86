//! ポート定義

pub mod outbound;
