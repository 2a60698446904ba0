//! # Generate Draft Use Case
//!
//! 入力テキストから最初のドラフトを生成するユースケース

use log::debug;
use std::sync::Arc;

use crate::domain::entities::workflow_result::WorkflowResult;
use crate::domain::errors::TransportError;
use crate::domain::repositories::drafting_engine::DraftingEngine;

/// ドラフト生成ユースケース
pub struct GenerateDraftUseCase<E: DraftingEngine> {
    engine: Arc<E>,
}

impl<E: DraftingEngine> GenerateDraftUseCase<E> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `engine` - ドラフトエンジン
    pub fn new(engine: Arc<E>) -> Self {
        Self { engine }
    }

    /// ドラフトを生成
    ///
    /// # Arguments
    ///
    /// * `raw_text` - ユーザーが入力した問題記述
    ///
    /// # Errors
    ///
    /// エンジンとの通信に失敗した場合にエラーを返す
    pub async fn execute(&self, raw_text: &str) -> Result<WorkflowResult, TransportError> {
        debug!("Requesting draft for {} chars of input", raw_text.len());
        self.engine.draft(raw_text).await
    }
}
