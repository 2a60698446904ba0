//! # Session Configuration DTO
//!
//! セッション設定のData Transfer Object

use crate::domain::entities::clarification::ClarificationPolicy;

/// セッション設定
///
/// 改善リクエストのたびに送信する確認ポリシーを保持する。
/// 既定値は `max_questions = 3`, `allow_proceed_with_assumptions = true`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// `/refine` に添付する確認ポリシー
    pub policy: ClarificationPolicy,
}

impl SessionConfig {
    /// 新しいセッション設定を作成します。
    ///
    /// # 例
    ///
    /// 既定のポリシー：
    ///
    /// ```
    /// use lfd_client::application::dto::session_config::SessionConfig;
    ///
    /// let config = SessionConfig::default();
    /// assert_eq!(config.policy.max_questions, 3);
    /// assert!(config.policy.allow_proceed_with_assumptions);
    /// ```
    ///
    /// 質問数を絞り、仮定での続行を許可しない設定：
    ///
    /// ```
    /// # use lfd_client::application::dto::session_config::SessionConfig;
    /// use lfd_client::domain::entities::clarification::ClarificationPolicy;
    ///
    /// let strict = SessionConfig::new(ClarificationPolicy {
    ///     max_questions: 1,
    ///     allow_proceed_with_assumptions: false,
    /// });
    ///
    /// assert_eq!(strict.policy.max_questions, 1);
    /// assert!(!strict.policy.allow_proceed_with_assumptions);
    /// ```
    pub fn new(policy: ClarificationPolicy) -> Self {
        Self { policy }
    }
}
