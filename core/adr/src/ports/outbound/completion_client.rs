//! 外部 Chat Completions サービスの Outbound ポート
//!
//! 役割付きメッセージを 1 回送り、生成テキストか型付きエラーを受け取るだけの狭い境界。
//! テストではスタブに差し替える。

use crate::domain::RequestConfig;
use common::error::Error;
use common::llm::Message;

pub trait CompletionClient: Send + Sync {
    /// 1 回だけリクエストし、最初の候補のテキストを返す（リトライしない）
    fn complete(&self, config: &RequestConfig, messages: &[Message]) -> Result<String, Error>;

    /// 送信せずにリクエスト本文（JSON）を返す（--dry-run 用）
    fn preview(&self, config: &RequestConfig, messages: &[Message]) -> Result<String, Error>;
}
