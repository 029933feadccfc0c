//! プロンプト読み込みの標準実装
//!
//! 既定のファイル名は実行ファイルの実体（シンボリックリンク解決後）と同じディレクトリで探す。

use common::ports::outbound::{EnvResolver, FileSystem};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{AdrError, PromptLocation, PromptTemplate};
use crate::ports::outbound::PromptLoader;

pub struct StdPromptLoader {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
}

impl StdPromptLoader {
    pub fn new(fs: Arc<dyn FileSystem>, env: Arc<dyn EnvResolver>) -> Self {
        Self { fs, env }
    }

    /// 読み込み対象のパスを決める
    pub fn resolve(&self, location: &PromptLocation) -> Result<PathBuf, AdrError> {
        match location {
            PromptLocation::Path(p) => Ok(p.clone()),
            PromptLocation::BesideExecutable(name) => {
                if name.is_absolute() {
                    return Ok(name.clone());
                }
                let exe = self
                    .env
                    .current_exe()
                    .map_err(|e| AdrError::PromptRead {
                        path: name.clone(),
                        message: e.to_string(),
                    })?;
                let exe = self.fs.canonicalize(&exe).unwrap_or(exe);
                let dir = exe.parent().map(|d| d.to_path_buf()).unwrap_or_default();
                Ok(dir.join(name))
            }
        }
    }
}

impl PromptLoader for StdPromptLoader {
    fn load(&self, location: &PromptLocation) -> Result<PromptTemplate, AdrError> {
        let path = self.resolve(location)?;
        self.fs
            .read_to_string(&path)
            .map(PromptTemplate::new)
            .map_err(|e| {
                if e.is_not_found() {
                    AdrError::MissingPromptFile(path.clone())
                } else {
                    AdrError::PromptRead {
                        path: path.clone(),
                        message: e.to_string(),
                    }
                }
            })
    }
}
