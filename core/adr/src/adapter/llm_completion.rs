//! Completion Client の標準実装（OpenAI 互換プロバイダへ単発リクエスト）

use common::error::Error;
use common::llm::{ChatRequest, LlmProvider, Message, OpenAiCompatProvider};

use crate::domain::RequestConfig;
use crate::ports::outbound::CompletionClient;

/// 呼び出しごとに RequestConfig からプロバイダを組み立てる。
/// 共有のクライアント状態は持たない。
#[derive(Debug, Clone, Default)]
pub struct LlmCompletionClient;

impl LlmCompletionClient {
    pub fn new() -> Self {
        Self
    }

    fn provider(&self, config: &RequestConfig) -> Result<OpenAiCompatProvider, Error> {
        OpenAiCompatProvider::new(config.base_url.clone(), config.api_key.clone())
    }
}

fn chat_request(config: &RequestConfig, messages: &[Message]) -> ChatRequest {
    ChatRequest {
        model: config.model.clone(),
        messages: messages.to_vec(),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    }
}

impl CompletionClient for LlmCompletionClient {
    fn complete(&self, config: &RequestConfig, messages: &[Message]) -> Result<String, Error> {
        self.provider(config)?.complete(&chat_request(config, messages))
    }

    fn preview(&self, config: &RequestConfig, messages: &[Message]) -> Result<String, Error> {
        let payload = self
            .provider(config)?
            .make_request_payload(&chat_request(config, messages))?;
        Ok(serde_json::to_string_pretty(&payload)?)
    }
}
