//! エラーハンドリング
//!
//! common が返す下位レイヤーのエラー。アプリ固有の分類（終了コード）は
//! 呼び出し側のクレートで行う。

use std::path::PathBuf;

/// common 共通のエラー型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 対象のファイルが存在しない
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),
    /// ファイル・標準入力などの I/O 失敗
    #[error("{0}")]
    Io(String),
    /// 環境変数が解決できない
    #[error("{0}")]
    Env(String),
    /// HTTP 通信・API エラー
    #[error("{0}")]
    Http(String),
    /// JSON のシリアライズ・パース失敗
    #[error("{0}")]
    Json(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    /// ファイルが存在しないことによるエラーか
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
