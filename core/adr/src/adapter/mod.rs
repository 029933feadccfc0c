pub(crate) mod config;
pub(crate) mod input_reader;
pub(crate) mod llm_completion;
pub(crate) mod output_writer;
pub(crate) mod prompt_loader;
pub(crate) mod status;
pub(crate) mod stubs;

pub(crate) use config::{load_file_config, resolve_settings};
pub(crate) use input_reader::StdInputReader;
pub(crate) use llm_completion::LlmCompletionClient;
pub(crate) use output_writer::StdOutputWriter;
pub(crate) use prompt_loader::StdPromptLoader;
pub(crate) use status::StderrStatus;

#[cfg(test)]
pub(crate) use stubs::{MapEnvResolver, MemStdin, RecordingLog, RecordingStatus, StubCompletion};
