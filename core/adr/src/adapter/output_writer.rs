//! 出力書き込みの標準実装

use common::ports::outbound::FileSystem;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AdrError, CompletionResult, OutputTarget};
use crate::ports::outbound::OutputWriter;

pub struct StdOutputWriter {
    fs: Arc<dyn FileSystem>,
    /// `-o -` の書き出し先（既定は標準出力）
    stdout: Mutex<Box<dyn Write + Send>>,
}

impl StdOutputWriter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_stdout(fs, Box::new(std::io::stdout()))
    }

    pub fn with_stdout(fs: Arc<dyn FileSystem>, stdout: Box<dyn Write + Send>) -> Self {
        Self {
            fs,
            stdout: Mutex::new(stdout),
        }
    }
}

impl OutputWriter for StdOutputWriter {
    fn write(&self, target: &OutputTarget, result: &CompletionResult) -> Result<(), AdrError> {
        match target {
            OutputTarget::File(path) => {
                self.fs
                    .write(path, result.as_str())
                    .map_err(|e| AdrError::OutputWrite {
                        path: path.clone(),
                        message: e.to_string(),
                    })
            }
            OutputTarget::Stdout => {
                let mut out = self.stdout.lock().unwrap_or_else(|e| e.into_inner());
                writeln!(out, "{}", result.as_str())
                    .and_then(|_| out.flush())
                    .map_err(|e| AdrError::OutputWrite {
                        path: PathBuf::from("-"),
                        message: e.to_string(),
                    })
            }
        }
    }
}
