//! # lfd-client
//!
//! LogFrameの「ドラフト → 確認 → 改善」サイクルを進めるクライアント
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ワークフロー状態、回答の整合、ゲーティング（外部依存なし）
//! - **Application層**: ユースケースとセッションコントローラー
//! - **Adapter層**: ドラフトエンジンとのHTTP通信、設定ファイル
//! - **Driver層**: CLI、対話ループ、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
