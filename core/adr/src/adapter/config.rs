//! 設定の読み込みと解決（adapter 層）
//!
//! 優先順位: CLI オプション > 環境変数 > config.json > 組み込みの既定値。
//! config.json は設定ディレクトリ（EnvResolver::resolve_config_dir）直下にあれば読む。

use common::domain::{ApiKey, ModelName};
use common::ports::outbound::{EnvResolver, FileSystem};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Config;
use crate::domain::{AdrError, InputSource, OutputTarget, PromptLocation};
use crate::usecase::generate::Settings;

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_PROMPT_FILE: &str = "prompt.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "adr.md";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// config.json の内容（すべて省略可）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub model: Option<String>,
    pub base_url: Option<String>,
    /// API キーを読む環境変数名
    pub api_key_env: Option<String>,
    /// 相対パスは設定ディレクトリ基準
    pub prompt: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// 設定ファイルと、それを見つけたディレクトリ
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub file: FileConfig,
    pub dir: Option<PathBuf>,
}

/// config.json を読む。ホームが解決できない・ファイルが無い場合は既定値。
/// 壊れた JSON や未知のキーは使い方エラー。
pub fn load_file_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
) -> Result<LoadedConfig, AdrError> {
    let dir = match env.resolve_config_dir() {
        Ok(d) => d.to_path_buf(),
        Err(_) => return Ok(LoadedConfig::default()),
    };
    let path = dir.join(CONFIG_FILE_NAME);
    let content = match fs.read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.is_not_found() => return Ok(LoadedConfig::default()),
        Err(e) => return Err(AdrError::usage(e.to_string())),
    };
    let file = FileConfig::parse(&content).map_err(|e| {
        AdrError::usage(format!("Invalid config file {}: {}", path.display(), e))
    })?;
    Ok(LoadedConfig {
        file,
        dir: Some(dir),
    })
}

fn relative_to(dir: Option<&Path>, p: &Path) -> PathBuf {
    match dir {
        Some(d) if p.is_relative() => d.join(p),
        _ => p.to_path_buf(),
    }
}

/// CLI・環境変数・設定ファイルから 1 回分の Settings を組み立てる
pub fn resolve_settings(config: &Config, loaded: &LoadedConfig, env: &dyn EnvResolver) -> Settings {
    let file = &loaded.file;
    let dir = loaded.dir.as_deref();

    let prompt = match (&config.prompt, &file.prompt) {
        // 相対名は実行ファイルの隣、絶対パスはそのまま
        (Some(p), _) if p.is_absolute() => PromptLocation::Path(p.clone()),
        (Some(p), _) => PromptLocation::BesideExecutable(p.clone()),
        (None, Some(p)) => PromptLocation::Path(relative_to(dir, p)),
        (None, None) => PromptLocation::BesideExecutable(PathBuf::from(DEFAULT_PROMPT_FILE)),
    };

    let output = config
        .output
        .clone()
        .or_else(|| file.output.as_deref().map(|p| relative_to(dir, p)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    let model = config
        .model
        .clone()
        .or_else(|| env.var("ADR_MODEL"))
        .or_else(|| file.model.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let base_url = config
        .base_url
        .clone()
        .or_else(|| env.var("OPENAI_BASE_URL"))
        .or_else(|| file.base_url.clone());

    let api_key_env = file
        .api_key_env
        .clone()
        .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());

    // 明示の --api-key が空文字列なら未設定扱い（環境変数へはフォールバックしない）
    let api_key = match &config.api_key {
        Some(k) => ApiKey::new(k.clone()),
        None => env.var(&api_key_env).and_then(ApiKey::new),
    };

    Settings {
        input: InputSource::from_option(config.input.clone()),
        prompt,
        output: OutputTarget::from_path(&output),
        model: ModelName::new(model),
        api_key,
        api_key_env,
        base_url,
        dry_run: config.dry_run,
    }
}
