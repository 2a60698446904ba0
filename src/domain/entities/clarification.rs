//! # Clarification Entities
//!
//! 確認質問、確認判定、確認ポリシー

use serde::{Deserialize, Serialize};

/// 確認質問
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationQuestion {
    /// 質問セット内で一意なID
    pub id: String,
    /// 表示用テキスト
    pub question: String,
    #[serde(default)]
    pub required: bool,
    /// この質問が変更しうるフィールド名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects: Option<Vec<String>>,
    /// 未回答時に採用される仮定
    #[serde(default)]
    pub default_assumption: Option<String>,
}

impl ClarificationQuestion {
    /// 任意回答の質問を作成
    pub fn new(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            required: false,
            affects: None,
            default_assumption: None,
        }
    }

    /// 必須回答の質問を作成
    pub fn required(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(id, question)
        }
    }
}

/// 次のアクション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    /// 必須質問が未回答（ブロッキング）
    WaitForUser,
    /// 仮定を置いて続行可能（ノンブロッキング）
    ProceedWithAssumptions,
}

impl NextAction {
    /// ワイヤ上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            NextAction::WaitForUser => "wait_for_user",
            NextAction::ProceedWithAssumptions => "proceed_with_assumptions",
        }
    }
}

impl std::fmt::Display for NextAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 確認判定
///
/// 現在の質問セットと、ユーザー待ちかどうかの判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarificationDecision {
    #[serde(default)]
    pub question_set: Vec<ClarificationQuestion>,
    #[serde(default)]
    pub stop_condition: Vec<String>,
    pub next_action: NextAction,
}

/// 確認ポリシー
///
/// `/refine` のたびに送信されるクライアント側の設定値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClarificationPolicy {
    pub max_questions: u32,
    pub allow_proceed_with_assumptions: bool,
}

impl Default for ClarificationPolicy {
    fn default() -> Self {
        Self {
            max_questions: 3,
            allow_proceed_with_assumptions: true,
        }
    }
}
