//! アダプター（ports::outbound の標準実装）
//!
//! usecase はポートの trait 経由でのみファイル・標準入力・環境変数・ログに触れる。
//! 実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod std_stdin;

pub use file_json_log::{FileJsonLog, NoopLog, StderrLog, TeeLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use std_stdin::StdStdin;
