mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::ports::outbound::{LogLevel, LogRecord};
use domain::AdrError;
use ports::inbound::UseCaseRunner;
use usecase::Outcome;
use wiring::{wire_adr, App};

/// 1 回分の実行（設定解決 → パイプライン → ライフサイクルログ）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, AdrError> {
        let loaded = adapter::load_file_config(self.app.fs.as_ref(), self.app.env_resolver.as_ref())?;
        let settings = adapter::resolve_settings(&config, &loaded, self.app.env_resolver.as_ref());

        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("model", settings.model.as_str())
                .field("input", settings.input.describe())
                .field("output", settings.output.describe())
                .field("dry_run", settings.dry_run),
        );

        let result = self.app.generate.run(settings).map(|outcome| {
            if let Outcome::Previewed(request_json) = outcome {
                println!("{}", request_json);
            }
            0
        });

        let code = match result {
            Ok(c) => c,
            Err(ref e) => e.exit_code(),
        };
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error")
                    .field("error", e.kind_name()),
            );
        }
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("exit_code", code),
        );
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            let msg = e.to_string();
            eprintln!("adr-generate: {}", msg.trim_end());
            if e.is_usage() && !msg.contains("--help") {
                eprintln!("Try 'adr-generate --help' for more information.");
            }
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, AdrError> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::Info(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    let app = wire_adr(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}
