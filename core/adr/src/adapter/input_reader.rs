//! 入力読み込みの標準実装（FileSystem / Stdin ポート経由）

use common::ports::outbound::{FileSystem, Stdin};
use std::sync::Arc;

use crate::domain::{AdrError, DesignText, InputSource};
use crate::ports::outbound::InputReader;

pub struct StdInputReader {
    fs: Arc<dyn FileSystem>,
    stdin: Arc<dyn Stdin>,
}

impl StdInputReader {
    pub fn new(fs: Arc<dyn FileSystem>, stdin: Arc<dyn Stdin>) -> Self {
        Self { fs, stdin }
    }
}

impl InputReader for StdInputReader {
    fn read(&self, source: &InputSource) -> Result<DesignText, AdrError> {
        match source {
            InputSource::File(path) => self.fs.read_to_string(path).map(DesignText::new).map_err(|e| {
                if e.is_not_found() {
                    AdrError::MissingInputFile(path.clone())
                } else {
                    AdrError::InputRead(e.to_string())
                }
            }),
            InputSource::Stdin => self
                .stdin
                .read_to_end()
                .map(DesignText::new)
                .map_err(|e| AdrError::InputRead(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::stubs::MemStdin;
    use common::adapter::StdFileSystem;
    use std::path::PathBuf;

    fn reader(stdin: &str) -> (StdInputReader, Arc<MemStdin>) {
        let stdin = Arc::new(MemStdin::new(stdin));
        let r = StdInputReader::new(Arc::new(StdFileSystem), Arc::clone(&stdin) as Arc<dyn Stdin>);
        (r, stdin)
    }

    #[test]
    fn test_read_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.md");
        std::fs::write(&path, "We chose a message queue for decoupling services.\n").unwrap();
        let (r, stdin) = reader("ignored");
        let text = r.read(&InputSource::File(path)).unwrap();
        assert_eq!(text.as_str(), "We chose a message queue for decoupling services.\n");
        assert_eq!(stdin.reads(), 0);
    }

    #[test]
    fn test_read_missing_file() {
        let (r, _) = reader("");
        let path = PathBuf::from("/definitely/not/here/design.md");
        let err = r.read(&InputSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, AdrError::MissingInputFile(ref p) if *p == path));
    }

    #[test]
    fn test_read_directory_is_input_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let (r, _) = reader("");
        let err = r.read(&InputSource::File(dir.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, AdrError::InputRead(_)));
    }

    #[test]
    fn test_read_stdin_once_unchanged() {
        let body = "line one\nline two\n\n  trailing spaces  ";
        let (r, stdin) = reader(body);
        let text = r.read(&InputSource::Stdin).unwrap();
        assert_eq!(text.as_str(), body);
        assert_eq!(text.len(), body.len());
        assert_eq!(stdin.reads(), 1);
    }
}
