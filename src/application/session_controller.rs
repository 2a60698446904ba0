//! # Session Controller
//!
//! ユーザー操作（generate / refine）をワークフロー状態とドラフトエンジンに対して順序付ける
//!
//! - 同時に発行できるリクエストは1つだけ（busyフラグで判定し、重複は拒否）
//! - 失敗してもそれまでの結果は破棄しない
//! - エラーは例外として外に出さず、エラースロットに格納する

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use uuid::Uuid;

use crate::application::dto::session_config::SessionConfig;
use crate::application::use_cases::generate_draft::GenerateDraftUseCase;
use crate::application::use_cases::refine_draft::RefineDraftUseCase;
use crate::domain::entities::workflow_result::WorkflowResult;
use crate::domain::entities::workflow_state::WorkflowState;
use crate::domain::errors::TransportError;
use crate::domain::repositories::drafting_engine::DraftingEngine;

/// アクションの結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 新しい結果を適用した
    Applied,
    /// 通信に失敗した（エラースロットを参照）
    Failed,
    /// 別のリクエストが処理中のため拒否した
    Busy,
    /// 前提条件を満たさないため何もしなかった
    NotReady,
}

/// プレゼンテーション層に公開する読み取り専用スナップショット
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub state: WorkflowState,
    pub busy: bool,
    pub error: Option<String>,
    /// 現在の結果を適用した時刻
    pub updated_at: Option<DateTime<Utc>>,
}

/// セッション中に変化するデータ
#[derive(Debug)]
struct SessionInner {
    state: WorkflowState,
    error: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

/// busyフラグを保持している間だけ生存するガード
///
/// 成功・失敗・キャンセルのいずれでも drop 時にフラグを解放する
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// セッションコントローラー
///
/// 1ユーザーセッションのワークフロー状態を排他的に所有する
pub struct SessionController<E: DraftingEngine> {
    session_id: Uuid,
    generate_use_case: GenerateDraftUseCase<E>,
    refine_use_case: RefineDraftUseCase<E>,
    busy: AtomicBool,
    inner: Mutex<SessionInner>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl<E: DraftingEngine> SessionController<E> {
    /// 新しいセッションを作成
    ///
    /// # Arguments
    ///
    /// * `engine` - ドラフトエンジン
    /// * `config` - セッション設定（確認ポリシー）
    /// * `raw_input` - 初期の入力テキスト
    pub fn new(engine: Arc<E>, config: SessionConfig, raw_input: impl Into<String>) -> Self {
        let state = WorkflowState::new(raw_input);
        let (snapshot_tx, _) = watch::channel(SessionSnapshot {
            state: state.clone(),
            busy: false,
            error: None,
            updated_at: None,
        });

        Self {
            session_id: Uuid::new_v4(),
            generate_use_case: GenerateDraftUseCase::new(engine.clone()),
            refine_use_case: RefineDraftUseCase::new(engine, config),
            busy: AtomicBool::new(false),
            inner: Mutex::new(SessionInner {
                state,
                error: None,
                updated_at: None,
            }),
            snapshot_tx,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// 現在のスナップショットを取得（ポーリング用）
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.lock_inner();
        SessionSnapshot {
            state: inner.state.clone(),
            busy: self.is_busy(),
            error: inner.error.clone(),
            updated_at: inner.updated_at,
        }
    }

    /// 状態遷移ごとに更新されるスナップショットを購読
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// 入力テキストを置き換える（どの状態でも可能、次の generate にのみ影響）
    pub fn set_raw_input(&self, text: impl Into<String>) {
        self.lock_inner().state.set_raw_input(text);
        self.publish();
    }

    /// 回答を設定する
    ///
    /// 現在の質問セットにないIDは無視して `false` を返す
    pub fn set_answer(&self, id: &str, text: impl Into<String>) -> bool {
        let applied = self.lock_inner().state.set_answer(id, text);
        if applied {
            self.publish();
        } else {
            debug!("[{}] Ignoring answer for unknown question {}", self.session_id, id);
        }
        applied
    }

    /// 入力テキストから最初のドラフトを生成
    pub async fn generate(&self) -> ActionOutcome {
        let Some(guard) = BusyGuard::acquire(&self.busy) else {
            warn!("[{}] generate rejected: a request is already in flight", self.session_id);
            return ActionOutcome::Busy;
        };

        let raw_text = {
            let mut inner = self.lock_inner();
            inner.error = None;
            inner.state.raw_input().to_string()
        };
        self.publish();

        info!("[{}] Generating first draft", self.session_id);
        let result = self.generate_use_case.execute(&raw_text).await;
        let outcome = self.finish(result);

        drop(guard);
        self.publish();
        outcome
    }

    /// 回答を反映してドラフトを改善
    ///
    /// 改善できない状態では何もしない（エラースロットも変更しない）
    pub async fn refine(&self) -> ActionOutcome {
        let Some(guard) = BusyGuard::acquire(&self.busy) else {
            warn!("[{}] refine rejected: a request is already in flight", self.session_id);
            return ActionOutcome::Busy;
        };

        let request = {
            let mut inner = self.lock_inner();
            let request = self.refine_use_case.build_request(&inner.state);
            if request.is_some() {
                inner.error = None;
            }
            request
        };
        let Some(request) = request else {
            debug!("[{}] refine skipped: nothing to refine", self.session_id);
            return ActionOutcome::NotReady;
        };
        self.publish();

        info!(
            "[{}] Refining draft with {} answer(s)",
            self.session_id,
            request.answers.len()
        );
        let result = self.refine_use_case.execute(&request).await;
        let outcome = self.finish(result);

        drop(guard);
        self.publish();
        outcome
    }

    /// 成功時は結果を丸ごと置き換え、失敗時はエラーのみ記録する
    fn finish(&self, result: Result<WorkflowResult, TransportError>) -> ActionOutcome {
        let mut inner = self.lock_inner();
        match result {
            Ok(result) => {
                info!(
                    "[{}] Applied result: {} question(s), next action {}",
                    self.session_id,
                    result.clarification.question_set.len(),
                    result.clarification.next_action
                );
                inner.state.apply_result(result);
                inner.updated_at = Some(Utc::now());
                ActionOutcome::Applied
            }
            Err(e) => {
                warn!("[{}] Request failed: {}", self.session_id, e);
                inner.error = Some(e.to_string());
                ActionOutcome::Failed
            }
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.snapshot_tx.send_replace(snapshot);
    }

    fn lock_inner(&self) -> MutexGuard<'_, SessionInner> {
        // poison時もデータはそのまま使う
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
