//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use crate::domain::AdrError;

/// adr-generate を 1 回実行する Inbound ポート
///
/// main はこの trait を実装した Runner の run を呼び出し、Err を終了コードに変換する。
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, AdrError>;
}
