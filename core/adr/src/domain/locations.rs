//! 入力・プロンプト・出力の所在

use std::path::{Path, PathBuf};

/// 設計議論テキストの取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 指定ファイルの全内容
    File(PathBuf),
    /// 標準入力を終端まで
    Stdin,
}

impl InputSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdin,
        }
    }

    /// ログ用の表記
    pub fn describe(&self) -> String {
        match self {
            Self::File(p) => p.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }
}

/// プロンプトファイルの所在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLocation {
    /// 実行ファイルと同じディレクトリ基準の名前（既定の prompt.txt と相対の -p）
    BesideExecutable(PathBuf),
    /// 解決済みのパス（絶対の -p、または設定ディレクトリ基準に解決した config.json の prompt）
    Path(PathBuf),
}

/// ADR の書き出し先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// 作成または切り詰めて上書きするファイル
    File(PathBuf),
    /// 標準出力（出力パスに "-" を指定したとき）
    Stdout,
}

impl OutputTarget {
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::File(p) => p.display().to_string(),
            Self::Stdout => "<stdout>".to_string(),
        }
    }
}
