//! 配線: 標準アダプタで App を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdEnvResolver, StdFileSystem, StdStdin, StderrLog, TeeLog};
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{
    LlmCompletionClient, StdInputReader, StdOutputWriter, StdPromptLoader, StderrStatus,
};
use crate::usecase::{GenerateAdrUseCase, GenerateDeps};

pub const LOG_FILE_NAME: &str = "adr-generate.jsonl";

/// main / Runner が使う依存一式
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    pub logger: Arc<dyn Log>,
    pub generate: GenerateAdrUseCase,
}

/// ログ出力先を組み立てる（ログディレクトリが解決できなければファイルには書かない）
fn build_logger(fs: &Arc<dyn FileSystem>, env: &Arc<dyn EnvResolver>, verbose: bool) -> Arc<dyn Log> {
    let file: Arc<dyn Log> = match env.resolve_log_dir() {
        Ok(dir) => Arc::new(FileJsonLog::new(Arc::clone(fs), dir.join(LOG_FILE_NAME))),
        Err(_) => Arc::new(NoopLog),
    };
    if verbose {
        Arc::new(TeeLog::new(vec![file, Arc::new(StderrLog)]))
    } else {
        file
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_adr(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let logger = build_logger(&fs, &env_resolver, verbose);
    let generate = GenerateAdrUseCase::new(GenerateDeps {
        input_reader: Arc::new(StdInputReader::new(Arc::clone(&fs), Arc::new(StdStdin))),
        prompt_loader: Arc::new(StdPromptLoader::new(Arc::clone(&fs), Arc::clone(&env_resolver))),
        completion: Arc::new(LlmCompletionClient::new()),
        output_writer: Arc::new(StdOutputWriter::new(Arc::clone(&fs))),
        status: Arc::new(StderrStatus),
        log: Arc::clone(&logger),
    });
    App {
        fs,
        env_resolver,
        logger,
        generate,
    }
}
