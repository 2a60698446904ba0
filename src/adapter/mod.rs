//! Adapter Layer
//!
//! 外部システム（ドラフトエンジンのHTTP API, 設定ファイル）との統合

pub mod config;
pub mod http;
