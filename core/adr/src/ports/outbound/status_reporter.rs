//! 利用者向け進捗表示の Outbound ポート

/// 各段の前に 1 行の進捗を表示する（"reading from stdin" など）
pub trait StatusReporter: Send + Sync {
    fn status(&self, line: &str);
}
