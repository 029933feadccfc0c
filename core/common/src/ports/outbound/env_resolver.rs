//! 環境変数解決 Outbound ポート
//!
//! usecase・adapter はこの trait 経由でのみ環境変数と実行ファイルの位置にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のマップ実装など。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を取得する（未設定・空文字列は None）
    fn var(&self, name: &str) -> Option<String>;

    /// 実行中のバイナリのパス
    fn current_exe(&self) -> Result<PathBuf, Error>;

    /// 設定ディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. ADR_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/adr-generate
    /// 3. $HOME/.config/adr-generate
    fn resolve_config_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = self.var("ADR_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }
        let base = self
            .var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(HomeDir::new(base.join("adr-generate")))
    }

    /// ログディレクトリを解決する
    ///
    /// 優先順位:
    /// 1. $ADR_HOME/log
    /// 2. $XDG_STATE_HOME/adr-generate/log
    /// 3. $HOME/.local/state/adr-generate/log
    fn resolve_log_dir(&self) -> Result<PathBuf, Error> {
        if let Some(home) = self.var("ADR_HOME") {
            return Ok(PathBuf::from(home).join("log"));
        }
        let base = self
            .var("XDG_STATE_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                self.var("HOME")
                    .map(|h| PathBuf::from(h).join(".local").join("state"))
            })
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(base.join("adr-generate").join("log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapEnv(HashMap<&'static str, &'static str>);

    impl EnvResolver for MapEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|s| s.to_string())
        }
        fn current_exe(&self) -> Result<PathBuf, Error> {
            Ok(PathBuf::from("/opt/adr/bin/adr-generate"))
        }
    }

    #[test]
    fn test_config_dir_prefers_adr_home() {
        let env = MapEnv(HashMap::from([("ADR_HOME", "/data/adr"), ("HOME", "/home/u")]));
        assert_eq!(*env.resolve_config_dir().unwrap(), PathBuf::from("/data/adr"));
        assert_eq!(env.resolve_log_dir().unwrap(), PathBuf::from("/data/adr/log"));
    }

    #[test]
    fn test_config_dir_xdg_then_home() {
        let env = MapEnv(HashMap::from([("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/u")]));
        assert_eq!(
            *env.resolve_config_dir().unwrap(),
            PathBuf::from("/xdg/adr-generate")
        );
        assert_eq!(
            env.resolve_log_dir().unwrap(),
            PathBuf::from("/home/u/.local/state/adr-generate/log")
        );

        let env = MapEnv(HashMap::from([("HOME", "/home/u")]));
        assert_eq!(
            *env.resolve_config_dir().unwrap(),
            PathBuf::from("/home/u/.config/adr-generate")
        );
    }

    #[test]
    fn test_no_home_is_env_error() {
        let env = MapEnv(HashMap::new());
        assert!(matches!(env.resolve_config_dir(), Err(Error::Env(_))));
        assert!(matches!(env.resolve_log_dir(), Err(Error::Env(_))));
    }
}
