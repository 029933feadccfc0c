//! 出力書き込みの Outbound ポート

use crate::domain::{AdrError, CompletionResult, OutputTarget};

/// ADR を書き出す（失敗は `AdrError::OutputWrite`）
pub trait OutputWriter: Send + Sync {
    fn write(&self, target: &OutputTarget, result: &CompletionResult) -> Result<(), AdrError>;
}
