//! LLMプロバイダのトレイト定義

use crate::domain::ModelName;
use crate::error::Error;
use serde_json::Value;

/// メッセージの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// メッセージ構造体
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// 1 回分のチャットリクエスト
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: ModelName,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// LLMプロバイダのトレイト
///
/// 各プロバイダはこのトレイトを実装する。`complete` は既定実装で
/// ペイロード生成 → HTTP → テキスト抽出を 1 回だけ行う（リトライしない）。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    fn make_request_payload(&self, request: &ChatRequest) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンス本文を取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列（2xx のみ）
    /// * `Err(Error)` - 通信失敗・API エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスから最初の候補のテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - パース失敗・API エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;

    /// 単発の完了。テキストが無い応答はエラーとして扱う。
    fn complete(&self, request: &ChatRequest) -> Result<String, Error> {
        let payload = self.make_request_payload(request)?;
        let request_json = serde_json::to_string(&payload)?;
        let response_json = self.make_http_request(&request_json)?;
        self.parse_response_text(&response_json)?
            .ok_or_else(|| Error::http(format!("{}: response contained no message content", self.name())))
    }
}
