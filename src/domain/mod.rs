//! # Domain Layer
//!
//! このモジュールはドラフト・確認・改善ワークフローの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやUIについて何も知らない
//! - フレームワークに依存しない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（LogFrame, WorkflowStateなど）
//! - **errors**: ドメインエラー（TransportError）
//! - **repositories**: ポートtrait（インターフェース定義のみ）

pub mod entities;
pub mod errors;
pub mod repositories;
