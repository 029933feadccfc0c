//! ファイルシステム Outbound ポート
//!
//! 入力・プロンプトの読み込み、ADR の書き出し、ログの追記はこの trait 経由で行う。

use crate::error::Error;
use std::path::{Path, PathBuf};

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のモックなど。
pub trait FileSystem: Send + Sync {
    /// 存在しない場合は `Error::NotFound` を返す
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    /// 作成または切り詰めて書き込む
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    /// ログディレクトリの作成に使う
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// シンボリックリンクを解決した絶対パス（存在しない場合は `Error::NotFound`）
    fn canonicalize(&self, path: &Path) -> Result<PathBuf, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
