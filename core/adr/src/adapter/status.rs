//! 進捗表示の標準実装（stderr。stdout は ADR 本体や --dry-run の出力に使う）

use crate::ports::outbound::StatusReporter;

#[derive(Debug, Clone, Default)]
pub struct StderrStatus;

impl StatusReporter for StderrStatus {
    fn status(&self, line: &str) {
        eprintln!("{}", line);
    }
}
