//! パイプラインを流れるテキスト値（いずれも 1 回の実行内で不変）

/// 入力の設計議論テキスト（ファイル全体または標準入力全体）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignText(String);

impl DesignText {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// system 指示として渡すプロンプト。置換などはせずそのまま使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// モデルの応答（前後の空白を除去済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult(String);

impl CompletionResult {
    /// 生の応答テキストから作る。前後の空白は常に取り除く。
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_result_is_trimmed() {
        let r = CompletionResult::from_raw("\n\n  # ADR: Use a Message Queue\n\n## Decision\n...  \n");
        assert_eq!(r.as_str(), "# ADR: Use a Message Queue\n\n## Decision\n...");
    }

    #[test]
    fn test_design_text_kept_verbatim() {
        let t = DesignText::new("  keep\r\nme  \n");
        assert_eq!(t.as_str(), "  keep\r\nme  \n");
        assert_eq!(t.len(), 13);
    }
}
