//! Outbound ポート: パイプラインが外界を使うための trait

pub mod completion_client;
pub mod input_reader;
pub mod output_writer;
pub mod prompt_loader;
pub mod status_reporter;

pub use completion_client::CompletionClient;
pub use input_reader::InputReader;
pub use output_writer::OutputWriter;
pub use prompt_loader::PromptLoader;
pub use status_reporter::StatusReporter;
