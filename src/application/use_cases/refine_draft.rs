//! # Refine Draft Use Case
//!
//! 回答を反映してドラフトを改善するユースケース

use log::debug;
use std::sync::Arc;

use crate::application::dto::session_config::SessionConfig;
use crate::domain::entities::workflow_result::WorkflowResult;
use crate::domain::entities::workflow_state::WorkflowState;
use crate::domain::errors::TransportError;
use crate::domain::repositories::drafting_engine::{DraftingEngine, RefineRequest};

/// ドラフト改善ユースケース
pub struct RefineDraftUseCase<E: DraftingEngine> {
    engine: Arc<E>,
    config: SessionConfig,
}

impl<E: DraftingEngine> RefineDraftUseCase<E> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `engine` - ドラフトエンジン
    /// * `config` - 確認ポリシーを含むセッション設定
    pub fn new(engine: Arc<E>, config: SessionConfig) -> Self {
        Self { engine, config }
    }

    /// 現在の状態から改善リクエストを組み立てる
    ///
    /// 改善できない状態（結果なし、または質問セットが空）では `None`
    pub fn build_request(&self, state: &WorkflowState) -> Option<RefineRequest> {
        if !state.can_refine() {
            return None;
        }

        let draft = state.draft()?;

        Some(RefineRequest {
            raw_text: state.raw_input().to_string(),
            draft_lfo: draft.clone(),
            question_set: state.question_set().to_vec(),
            answers: state.compact_answers(),
            policy: Some(self.config.policy),
        })
    }

    /// 改善リクエストを送信
    ///
    /// # Errors
    ///
    /// エンジンとの通信に失敗した場合にエラーを返す
    pub async fn execute(&self, request: &RefineRequest) -> Result<WorkflowResult, TransportError> {
        debug!(
            "Requesting refinement with {} of {} questions answered",
            request.answers.len(),
            request.question_set.len()
        );
        self.engine.refine(request).await
    }
}
