//! 実行を打ち切るエラーの分類と終了コード
//!
//! 終了コードは BSD sysexits に合わせる。どのエラーもリトライせず main まで伝播し、
//! main がメッセージ表示と終了コードへの変換を一手に行う。

use std::path::PathBuf;

pub const EXIT_USAGE: i32 = 64;
pub const EXIT_NO_INPUT: i32 = 66;
pub const EXIT_UNAVAILABLE: i32 = 69;
pub const EXIT_PROMPT_MISSING: i32 = 72;
pub const EXIT_CANT_CREATE: i32 = 73;
pub const EXIT_IO: i32 = 74;
pub const EXIT_NO_PERM: i32 = 77;

#[derive(Debug, thiserror::Error)]
pub enum AdrError {
    /// 引数・設定ファイルの不正
    #[error("{0}")]
    Usage(String),

    #[error("Input file {} not found.", .0.display())]
    MissingInputFile(PathBuf),

    /// 存在はするが読めない入力（権限・ディレクトリ・非 UTF-8・stdin の失敗）
    #[error("Failed to read input: {0}")]
    InputRead(String),

    #[error("Prompt file {} not found.", .0.display())]
    MissingPromptFile(PathBuf),

    /// 存在はするが読めないプロンプト（権限・非 UTF-8・実行ファイルの位置が不明）
    #[error("Failed to read prompt file {}: {message}", .path.display())]
    PromptRead { path: PathBuf, message: String },

    #[error("No API key: pass --api-key or set the {env_var} environment variable.")]
    MissingCredential { env_var: String },

    /// 認証・レート制限・不正リクエスト・通信失敗をまとめた外部サービスのエラー
    #[error("Error with the completion API: {0}")]
    ExternalService(String),

    #[error("Failed to write output to {}: {message}", .path.display())]
    OutputWrite { path: PathBuf, message: String },
}

impl AdrError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::MissingInputFile(_) => EXIT_NO_INPUT,
            Self::InputRead(_) => EXIT_IO,
            Self::MissingPromptFile(_) | Self::PromptRead { .. } => EXIT_PROMPT_MISSING,
            Self::MissingCredential { .. } => EXIT_NO_PERM,
            Self::ExternalService(_) => EXIT_UNAVAILABLE,
            Self::OutputWrite { .. } => EXIT_CANT_CREATE,
        }
    }

    /// 使い方の表示を添えるべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// ログの kind / フィールド用の短い名前
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::MissingInputFile(_) => "missing_input_file",
            Self::InputRead(_) => "input_read",
            Self::MissingPromptFile(_) => "missing_prompt_file",
            Self::PromptRead { .. } => "prompt_read",
            Self::MissingCredential { .. } => "missing_credential",
            Self::ExternalService(_) => "external_service",
            Self::OutputWrite { .. } => "output_write",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all() -> Vec<AdrError> {
        vec![
            AdrError::usage("bad flag"),
            AdrError::MissingInputFile(PathBuf::from("design.md")),
            AdrError::InputRead("stdin closed".to_string()),
            AdrError::MissingPromptFile(PathBuf::from("/opt/adr/prompt.txt")),
            AdrError::MissingCredential {
                env_var: "OPENAI_API_KEY".to_string(),
            },
            AdrError::ExternalService("Rate limit reached".to_string()),
            AdrError::OutputWrite {
                path: PathBuf::from("/ro/adr.md"),
                message: "Permission denied".to_string(),
            },
        ]
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let codes: Vec<i32> = all().iter().map(|e| e.exit_code()).collect();
        let unique: HashSet<i32> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.iter().all(|c| *c != 0));
    }

    #[test]
    fn test_messages_keep_details() {
        let msgs: Vec<String> = all().iter().map(|e| e.to_string()).collect();
        assert_eq!(msgs[1], "Input file design.md not found.");
        assert_eq!(msgs[3], "Prompt file /opt/adr/prompt.txt not found.");
        assert!(msgs[4].contains("OPENAI_API_KEY"));
        assert!(msgs[5].contains("Rate limit reached"));
        assert!(msgs[6].contains("/ro/adr.md") && msgs[6].contains("Permission denied"));
    }

    #[test]
    fn test_unreadable_prompt_names_prompt_not_input() {
        let err = AdrError::PromptRead {
            path: PathBuf::from("/opt/adr/prompt.txt"),
            message: "Permission denied".to_string(),
        };
        assert_eq!(err.exit_code(), 72);
        assert_eq!(
            err.to_string(),
            "Failed to read prompt file /opt/adr/prompt.txt: Permission denied"
        );
        assert!(!err.to_string().contains("input"));
    }

    #[test]
    fn test_only_usage_is_usage() {
        let usage: Vec<bool> = all().iter().map(|e| e.is_usage()).collect();
        assert_eq!(usage.iter().filter(|u| **u).count(), 1);
        assert!(usage[0]);
    }
}
