//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **LogFrame / DraftResult**: エンジンが生成するドラフト
//! - **ClarificationQuestion / ClarificationDecision**: 確認質問と判定
//! - **WorkflowResult**: `/draft` と `/refine` のレスポンス
//! - **AnswerMap**: 質問IDをキーとした回答
//! - **WorkflowState**: ドラフト・確認・改善サイクルの状態

pub mod answer_map;
pub mod clarification;
pub mod log_frame;
pub mod workflow_result;
pub mod workflow_state;
