//! Outbound ポート: アプリが外界（FS・標準入力・環境変数・ログ）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod log;
pub mod stdin;

pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
pub use stdin::Stdin;
