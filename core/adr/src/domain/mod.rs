//! adr 固有のドメイン型（型と不変条件）

pub mod error;
pub mod locations;
pub mod request_config;
pub mod text;

pub use error::AdrError;
pub use locations::{InputSource, OutputTarget, PromptLocation};
pub use request_config::RequestConfig;
pub use text::{CompletionResult, DesignText, PromptTemplate};
