//! # Application Layer
//!
//! アプリケーション固有のビジネスフロー（ユースケースとセッション制御）
//!
//! ## 特徴
//!
//! - Domain層のエンティティを組み合わせてドラフト・改善サイクルを実現
//! - DraftingEngine traitに依存（HTTP実装には依存しない）
//! - 外部システムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **use_cases**: ユースケース
//! - **session_controller**: ユーザー操作を受けるセッションコントローラー

pub mod dto;
pub mod session_controller;
pub mod use_cases;
