//! ADR 生成のユースケース
//!
//! 入力 → プロンプト → 完了 → 出力 を 1 度ずつ順に実行する。途中で失敗したら
//! その時点で Err を返し、出力ファイルには触れない。

use common::domain::{ApiKey, ModelName};
use common::llm::Message;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::{
    AdrError, CompletionResult, DesignText, InputSource, OutputTarget, PromptLocation,
    PromptTemplate, RequestConfig,
};
use crate::ports::outbound::{
    CompletionClient, InputReader, OutputWriter, PromptLoader, StatusReporter,
};

/// 1 回の実行に必要な解決済み設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: InputSource,
    pub prompt: PromptLocation,
    pub output: OutputTarget,
    pub model: ModelName,
    pub api_key: Option<ApiKey>,
    /// キー未設定時のメッセージに使う環境変数名
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub dry_run: bool,
}

/// 実行結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// ADR を書き出した
    Written(CompletionResult),
    /// --dry-run: 送るはずだったリクエスト本文
    Previewed(String),
}

pub struct GenerateDeps {
    pub input_reader: Arc<dyn InputReader>,
    pub prompt_loader: Arc<dyn PromptLoader>,
    pub completion: Arc<dyn CompletionClient>,
    pub output_writer: Arc<dyn OutputWriter>,
    pub status: Arc<dyn StatusReporter>,
    pub log: Arc<dyn Log>,
}

pub struct GenerateAdrUseCase {
    deps: GenerateDeps,
}

/// system にプロンプト、user に設計テキストの 2 メッセージ（この順）
pub fn build_messages(prompt: &PromptTemplate, design: &DesignText) -> Vec<Message> {
    vec![
        Message::system(prompt.as_str()),
        Message::user(design.as_str()),
    ]
}

impl GenerateAdrUseCase {
    pub fn new(deps: GenerateDeps) -> Self {
        Self { deps }
    }

    fn step_log(&self, message: &str) -> LogRecord {
        LogRecord::new(LogLevel::Info, message)
            .layer("usecase")
            .kind("step")
    }

    fn log(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record);
    }

    pub fn run(&self, settings: Settings) -> Result<Outcome, AdrError> {
        let config = RequestConfig::new(
            settings.model.clone(),
            settings.api_key.clone(),
            settings.base_url.clone(),
        );
        // 入力を読む前に確認する（stdin を待たせてから失敗しない）
        if config.api_key.is_none() && !settings.dry_run {
            return Err(AdrError::MissingCredential {
                env_var: settings.api_key_env.clone(),
            });
        }

        match settings.input {
            InputSource::Stdin => self.deps.status.status("reading from stdin"),
            InputSource::File(ref p) => self
                .deps
                .status
                .status(&format!("reading input from {}", p.display())),
        }
        let design = self.deps.input_reader.read(&settings.input)?;
        self.log(
            self.step_log("input read")
                .field("source", settings.input.describe())
                .field("bytes", design.len()),
        );

        let prompt = self.deps.prompt_loader.load(&settings.prompt)?;
        self.log(self.step_log("prompt loaded").field("bytes", prompt.as_str().len()));

        let messages = build_messages(&prompt, &design);

        if settings.dry_run {
            let preview = self
                .deps
                .completion
                .preview(&config, &messages)
                .map_err(|e| AdrError::ExternalService(e.to_string()))?;
            self.log(self.step_log("dry run"));
            return Ok(Outcome::Previewed(preview));
        }

        self.deps
            .status
            .status(&format!("generating using model {}", config.model));
        let raw = self
            .deps
            .completion
            .complete(&config, &messages)
            .map_err(|e| AdrError::ExternalService(e.to_string()))?;
        let result = CompletionResult::from_raw(&raw);
        self.log(
            self.step_log("completion received")
                .field("model", config.model.as_str())
                .field("bytes", result.len()),
        );

        self.deps
            .status
            .status(&format!("writing output to {}", settings.output.describe()));
        self.deps.output_writer.write(&settings.output, &result)?;
        self.log(self.step_log("output written").field("target", settings.output.describe()));

        self.deps.status.status("done");
        Ok(Outcome::Written(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_messages_order() {
        let messages = build_messages(
            &PromptTemplate::new("Summarize this decision as a formal ADR."),
            &DesignText::new("We chose a message queue for decoupling services."),
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], Message::system("Summarize this decision as a formal ADR."));
        assert_eq!(
            messages[1],
            Message::user("We chose a message queue for decoupling services.")
        );
    }
}
