//! CLI 層: 引数解析と補完スクリプト生成

mod args;

pub use args::{parse_args, print_completion, Config, ParseOutcome};

#[cfg(test)]
pub use args::parse_args_from;
