//! # WorkflowResult
//!
//! `/draft` と `/refine` の両方が返すエンベロープ

use serde::{Deserialize, Serialize};

use super::clarification::ClarificationDecision;
use super::log_frame::DraftResult;

/// ワークフロー結果
///
/// クライアントが「現在の結果」として保持する単位。
/// 差分ではなく、新しい結果で丸ごと置き換える。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub drafting: DraftResult,
    pub clarification: ClarificationDecision,

    /// 前処理の成果物（不透明、そのまま保持）
    #[serde(default)]
    pub preprocess: serde_json::Value,
}
