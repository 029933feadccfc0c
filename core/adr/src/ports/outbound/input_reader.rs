//! 入力読み込みの Outbound ポート

use crate::domain::{AdrError, DesignText, InputSource};

/// 設計議論テキストを取得する
///
/// ファイルが無ければ `AdrError::MissingInputFile`、読めなければ `AdrError::InputRead`。
pub trait InputReader: Send + Sync {
    fn read(&self, source: &InputSource) -> Result<DesignText, AdrError>;
}
