//! Completion Client に渡すリクエスト設定

use common::domain::{ApiKey, ModelName};

/// 出力トークン数の上限（固定）
pub const MAX_OUTPUT_TOKENS: u32 = 500;
/// サンプリング温度（固定）
pub const TEMPERATURE: f64 = 0.7;

/// 1 回の実行で 1 度だけ組み立てるリクエスト設定
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub model: ModelName,
    /// CLI でも環境変数でも与えられなければ None
    pub api_key: Option<ApiKey>,
    /// Chat Completions のベース URL（None のときプロバイダ既定）
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl RequestConfig {
    pub fn new(model: ModelName, api_key: Option<ApiKey>, base_url: Option<String>) -> Self {
        Self {
            model,
            api_key,
            base_url,
            max_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}
