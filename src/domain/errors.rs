//! # Domain Errors
//!
//! ドラフトエンジンとの通信失敗を表す型付きエラー

use thiserror::Error;

/// トランスポートエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// 成功以外のステータスが返された（診断用にボディをそのまま保持）
    #[error("API error {status}\n{body}")]
    Status { status: u16, body: String },

    /// ステータスを受け取る前に失敗した（接続エラーなど）
    #[error("Request failed: {0}")]
    Request(String),

    /// 成功レスポンスのボディが期待する形式でない
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl TransportError {
    /// HTTPステータス（あれば）
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
