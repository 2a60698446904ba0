//! # Driver Layer (Presentation)
//!
//! CLIと対話ループを提供
//!
//! ## 特徴
//!
//! - セッションコントローラーを呼び出してワークフローを進める
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - スナップショットを描画するだけで、業務ロジックは持たない
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **repl**: コマンドの解析と描画
//! - **workflow**: 対話セッションのオーケストレーション

pub mod cli;
pub mod repl;
pub mod workflow;

pub use cli::Args;
pub use workflow::DraftSessionWorkflow;
