//! 標準入力 Outbound ポート

use crate::error::Error;

/// 標準入力を終端まで読む抽象
///
/// テストではメモリ上の文字列を返す実装に差し替える。
pub trait Stdin: Send + Sync {
    fn read_to_end(&self) -> Result<String, Error>;
}
