//! テスト用: 外界をメモリ上で差し替えるスタブ群


#[cfg(test)]
pub use stub::{MapEnvResolver, MemStdin, RecordingLog, RecordingStatus, StubCompletion};
