//! # Drafting Engine Trait
//!
//! リモートのドラフトエンジンへの2つの操作（`draft`, `refine`）を抽象化

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::clarification::{ClarificationPolicy, ClarificationQuestion};
use crate::domain::entities::log_frame::LogFrame;
use crate::domain::entities::workflow_result::WorkflowResult;
use crate::domain::errors::TransportError;

/// 改善リクエスト
///
/// `/refine` に送るペイロード。フィールド名はワイヤ形式と一致させる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineRequest {
    pub raw_text: String,
    pub draft_lfo: LogFrame,
    pub question_set: Vec<ClarificationQuestion>,
    pub answers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<ClarificationPolicy>,
}

/// ドラフトエンジン
///
/// リトライもタイムアウトも行わない。失敗はそのまま [`TransportError`] で返す。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DraftingEngine: Send + Sync {
    /// 入力テキストから最初のドラフトを生成
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合、または成功以外のステータスが返された場合
    async fn draft(&self, raw_text: &str) -> Result<WorkflowResult, TransportError>;

    /// 回答を反映してドラフトを改善
    ///
    /// # Errors
    ///
    /// 通信に失敗した場合、または成功以外のステータスが返された場合
    async fn refine(&self, request: &RefineRequest) -> Result<WorkflowResult, TransportError>;
}
