//! LLMプロバイダの実装
//!
//! Chat Completions 互換エンドポイントへ単発リクエストを送る。

pub mod openai_compat;
pub mod provider;

pub use openai_compat::OpenAiCompatProvider;
pub use provider::{ChatRequest, LlmProvider, Message, Role};
