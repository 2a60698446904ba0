//! # AnswerMap
//!
//! 質問IDをキーとした回答マップ

use std::collections::{BTreeMap, HashSet};

use super::clarification::ClarificationQuestion;

/// 回答マップ
///
/// キーは常に現在の質問セットのIDのみ。
/// 質問セットが変わるたびに [`AnswerMap::reconcile`] で整合させる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    entries: BTreeMap<String, String>,
}

impl AnswerMap {
    /// 空の回答マップを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 質問セットに合わせてキーを整合させます。
    ///
    /// - 新しい質問IDは空の回答で追加
    /// - 質問セットに存在しないIDは削除
    /// - 両方に存在するIDの回答はそのまま保持
    ///
    /// 同じ質問セットで何度呼んでも結果は変わらない（冪等）。
    ///
    /// # 例
    ///
    /// ```
    /// use lfd_client::domain::entities::answer_map::AnswerMap;
    /// use lfd_client::domain::entities::clarification::ClarificationQuestion;
    ///
    /// let mut answers = AnswerMap::new();
    /// answers.reconcile(&[ClarificationQuestion::new("q1", "Timeframe?")]);
    /// assert!(answers.set("q1", "8 weeks"));
    ///
    /// answers.reconcile(&[
    ///     ClarificationQuestion::new("q1", "Timeframe?"),
    ///     ClarificationQuestion::new("q2", "Owner?"),
    /// ]);
    /// assert_eq!(answers.get("q1"), Some("8 weeks"));
    /// assert_eq!(answers.get("q2"), Some(""));
    ///
    /// answers.reconcile(&[ClarificationQuestion::new("q2", "Owner?")]);
    /// assert!(!answers.contains("q1"));
    /// ```
    pub fn reconcile(&mut self, question_set: &[ClarificationQuestion]) {
        let active: HashSet<&str> = question_set.iter().map(|q| q.id.as_str()).collect();

        self.entries.retain(|id, _| active.contains(id.as_str()));

        for id in active {
            self.entries.entry(id.to_string()).or_default();
        }
    }

    /// 回答を上書きする
    ///
    /// IDが存在しない場合は何もせず `false` を返す
    pub fn set(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.entries.get_mut(id) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    /// 空白でない回答のみを抽出（トリム済み）
    ///
    /// 送信用ペイロード。空欄は情報として送らない。
    pub fn compact(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|(id, text)| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| (id.clone(), trimmed.to_string()))
            })
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// 回答が空白かどうか（未登録IDも空白扱い）
    pub fn is_blank(&self, id: &str) -> bool {
        self.get(id).is_none_or(|text| text.trim().is_empty())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
