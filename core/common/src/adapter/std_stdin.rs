//! 標準入力の標準実装

use crate::error::Error;
use crate::ports::outbound::Stdin;
use std::io::Read;

/// プロセスの標準入力を終端まで読む
#[derive(Debug, Clone, Default)]
pub struct StdStdin;

impl Stdin for StdStdin {
    fn read_to_end(&self) -> Result<String, Error> {
        let mut buf = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        Ok(buf)
    }
}
