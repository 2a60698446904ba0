//! # Workflow State
//!
//! ドラフト → 確認 → 改善サイクルの状態を保持するエンティティ

use std::collections::BTreeMap;

use super::answer_map::AnswerMap;
use super::clarification::{ClarificationQuestion, NextAction};
use super::log_frame::LogFrame;
use super::workflow_result::WorkflowResult;

/// ワークフロー状態
///
/// 入力テキスト、最新のワークフロー結果、回答マップを保持し、
/// 質問セットと回答マップの整合性を保証する。
///
/// 状態遷移はセッションコントローラーから駆動される：
/// `Empty`（結果なし）→ `Drafted` → (改善リクエスト中) → `Drafted` → ...
#[derive(Debug, Clone, Default)]
pub struct WorkflowState {
    raw_input: String,
    result: Option<WorkflowResult>,
    answers: AnswerMap,
}

impl WorkflowState {
    /// 入力テキストを指定して作成
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            ..Self::default()
        }
    }

    /// 入力テキストを置き換える（他の状態には影響しない）
    pub fn set_raw_input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    /// ワークフロー結果を丸ごと置き換え、回答マップを新しい質問セットに整合させる
    pub fn apply_result(&mut self, result: WorkflowResult) {
        self.answers.reconcile(&result.clarification.question_set);
        self.result = Some(result);
    }

    /// 回答を設定する
    ///
    /// 現在の質問セットにないIDは無視し、`false` を返す
    pub fn set_answer(&mut self, id: &str, text: impl Into<String>) -> bool {
        self.answers.set(id, text)
    }

    /// 送信用の回答（空白を除外、トリム済み）
    pub fn compact_answers(&self) -> BTreeMap<String, String> {
        self.answers.compact()
    }

    /// `next_action` が `wait_for_user` かどうか
    pub fn is_blocked(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| r.clarification.next_action == NextAction::WaitForUser)
    }

    /// 改善リクエストを送れるかどうか
    ///
    /// 結果が存在し、質問セットが空でない場合のみ `true`。
    /// ドラフトのLogFrameは `DraftResult` に必ず含まれる。
    pub fn can_refine(&self) -> bool {
        self.result
            .as_ref()
            .is_some_and(|r| !r.clarification.question_set.is_empty())
    }

    /// 回答が空白のままの必須質問
    pub fn unanswered_required(&self) -> Vec<&ClarificationQuestion> {
        self.question_set()
            .iter()
            .filter(|q| q.required && self.answers.is_blank(&q.id))
            .collect()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn result(&self) -> Option<&WorkflowResult> {
        self.result.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn draft(&self) -> Option<&LogFrame> {
        self.result.as_ref().map(|r| &r.drafting.draft_lfo)
    }

    /// 現在の質問セット（結果がなければ空）
    pub fn question_set(&self) -> &[ClarificationQuestion] {
        self.result
            .as_ref()
            .map(|r| r.clarification.question_set.as_slice())
            .unwrap_or(&[])
    }
}
