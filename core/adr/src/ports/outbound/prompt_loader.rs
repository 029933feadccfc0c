//! プロンプト読み込みの Outbound ポート

use crate::domain::{AdrError, PromptLocation, PromptTemplate};

/// プロンプトファイルを解決して全文を返す（無ければ `AdrError::MissingPromptFile`）
pub trait PromptLoader: Send + Sync {
    fn load(&self, location: &PromptLocation) -> Result<PromptTemplate, AdrError>;
}
