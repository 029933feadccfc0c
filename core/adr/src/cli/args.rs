use crate::domain::AdrError;
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// コマンドラインで与えられた値（未指定は None。既定値の適用は adapter::config で行う）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// 位置引数または -i / --input。None なら標準入力
    pub input: Option<PathBuf>,
    pub prompt: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// --dry-run: リクエスト本文を表示するだけで送信しない
    pub dry_run: bool,
    /// -v / --verbose: 診断ログを stderr にも出す
    pub verbose: bool,
}

/// 解析結果: 通常の Config / 補完スクリプト生成 / ヘルプ・バージョン表示
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// --help / --version（表示して正常終了）
    Info(String),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("adr-generate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate an Architecture Decision Record from a design discussion")
        .after_help(
            "Environment:\n  \
             OPENAI_API_KEY   API key (the variable name can be changed with api_key_env in config.json)\n  \
             ADR_MODEL        Default model\n  \
             OPENAI_BASE_URL  Chat completions base URL\n  \
             ADR_HOME         Directory holding config.json and log/ (default: XDG dirs)",
        )
        .arg(
            clap::Arg::new("input")
                .index(1)
                .value_name("INPUT")
                .help("Design discussion file (reads stdin when omitted)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("input-flag")
                .short('i')
                .long("input")
                .value_name("path")
                .help("Design discussion file (same as INPUT)")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("input"),
        )
        .arg(
            clap::Arg::new("prompt")
                .short('p')
                .long("prompt")
                .value_name("file")
                .help("System prompt file (default: prompt.txt next to the executable)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("path")
                .help("Where to write the ADR, or - for stdout (default: adr.md)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Model name (default: gpt-4)"),
        )
        .arg(
            clap::Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("key")
                .help("API key (default: $OPENAI_API_KEY)"),
        )
        .arg(
            clap::Arg::new("base-url")
                .long("base-url")
                .value_name("url")
                .help("Chat completions base URL (default: https://api.openai.com/v1)"),
        )
        .arg(
            clap::Arg::new("dry-run")
                .long("dry-run")
                .help("Print the request that would be sent and exit without calling the API")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Mirror diagnostic log records to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell)),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let input = matches
        .get_one::<PathBuf>("input")
        .or_else(|| matches.get_one::<PathBuf>("input-flag"))
        .cloned();

    Config {
        input,
        prompt: matches.get_one::<PathBuf>("prompt").cloned(),
        output: matches.get_one::<PathBuf>("output").cloned(),
        model: matches.get_one::<String>("model").cloned(),
        api_key: matches.get_one::<String>("api-key").cloned(),
        base_url: matches.get_one::<String>("base-url").cloned(),
        dry_run: matches.get_flag("dry-run"),
        verbose: matches.get_flag("verbose"),
    }
}

fn parse_from<I, T>(args: I) -> Result<ParseOutcome, AdrError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Ok(ParseOutcome::Info(e.to_string()))
                }
                _ => Err(AdrError::usage(e.to_string())),
            };
        }
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<ParseOutcome, AdrError> {
    parse_from(std::env::args_os())
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<ParseOutcome, AdrError> {
    parse_from(args.iter().copied())
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "adr-generate", &mut std::io::stdout());
}
