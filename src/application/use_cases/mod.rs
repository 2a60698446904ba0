//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **GenerateDraftUseCase**: 入力テキストから最初のドラフトを生成
//! - **RefineDraftUseCase**: 回答を反映してドラフトを改善

pub mod generate_draft;
pub mod refine_draft;
