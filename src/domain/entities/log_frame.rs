//! # LogFrame Entity
//!
//! ドラフトエンジンが生成するLogFrameとドラフト結果

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// LogFrame（Goal / Purpose / Outcomes / Inputs）
///
/// エンジンが生成した構造化データ。クライアントは不透明なデータとして扱い、
/// `/refine` でそのまま送り返す。未知のフィールドも `extra` に保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogFrame {
    pub goal: String,
    pub purpose: String,
    pub outcomes: Vec<String>,
    pub inputs: Vec<String>,

    /// 質問ID → 回答（エンジン側でマージ済みのもの）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_answers: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// ドラフト結果
///
/// 1回のドラフト処理の出力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftResult {
    pub draft_lfo: LogFrame,

    /// 表示専用のスコア（クライアント側で閾値判定はしない）
    pub confidence: f64,

    /// 未構造化のオープンクエスチョン
    #[serde(default)]
    pub open_questions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<serde_json::Value>,
}
