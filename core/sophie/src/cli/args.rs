use crate::domain::{SophieCommand, YearMonth};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::domain::{ModelName, ProviderName};
use common::error::Error;

/// `--summary` を値なしで指定したときの値（全期間）
const SUMMARY_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    pub profile: Option<ProviderName>,
    pub model: Option<ModelName>,
    /// --summary [YYYY-MM]: Some("all") は全期間
    pub summary: Option<String>,
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("sophie")
        .about("Record expenses and study plans from free-text Spanish messages")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("profile")
                .help("Specify LLM profile (openai, openrouter, openai_compat, echo, or a name from config.json)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("model")
                .short('m')
                .long("model")
                .value_name("model")
                .help("Specify model name (e.g. gpt-4o-mini)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("summary")
                .long("summary")
                .value_name("YYYY-MM")
                .help("Show recorded expenses for a month (all months when omitted)")
                .num_args(0..=1)
                .default_missing_value(SUMMARY_ALL),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("message")
                .index(1)
                .help("Message words")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        profile: matches
            .get_one::<String>("profile")
            .map(|s| ProviderName::new(s.clone())),
        model: matches
            .get_one::<String>("model")
            .map(|s| ModelName::new(s.clone())),
        summary: matches.get_one::<String>("summary").cloned(),
        message_args: matches
            .get_many::<String>("message")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "sophie", &mut std::io::stdout());
}

/// Config を SophieCommand に変換する（月指定の書式だけここで検査する）
pub fn config_to_command(config: Config) -> Result<SophieCommand, Error> {
    if config.help {
        return Ok(SophieCommand::Help);
    }

    if let Some(summary) = config.summary {
        let month = if summary == SUMMARY_ALL {
            None
        } else {
            Some(YearMonth::parse(&summary)?)
        };
        return Ok(SophieCommand::Summary { month });
    }

    Ok(SophieCommand::Process {
        message: config.message_args.join(" "),
        profile: config.profile,
        model: config.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args_no_args() {
        let config = parse_args_from(&["sophie"]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_args_help_short_and_long() {
        assert!(parse_args_from(&["sophie", "-h"]).unwrap().help);
        assert!(parse_args_from(&["sophie", "--help"]).unwrap().help);
        assert_eq!(
            config_to_command(parse_args_from(&["sophie", "-h", "hola"]).unwrap()).unwrap(),
            SophieCommand::Help
        );
    }

    #[test]
    fn test_parse_args_message_words() {
        let config = parse_args_from(&["sophie", "hoy", "fui", "al", "supermercado"]).unwrap();
        assert_eq!(config.message_args, vec!["hoy", "fui", "al", "supermercado"]);
        assert_eq!(
            config_to_command(config).unwrap(),
            SophieCommand::Process {
                message: "hoy fui al supermercado".to_string(),
                profile: None,
                model: None,
            }
        );
    }

    #[test]
    fn test_parse_args_profile_and_model() {
        let config =
            parse_args_from(&["sophie", "-p", "echo", "--model", "gpt-4o-mini", "estudiar"]).unwrap();
        assert_eq!(config.profile, Some(ProviderName::new("echo")));
        assert_eq!(config.model, Some(ModelName::new("gpt-4o-mini")));
        assert_eq!(config.message_args, vec!["estudiar"]);
    }

    #[test]
    fn test_parse_args_profile_requires_arg() {
        let err = parse_args_from(&["sophie", "-p"]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["sophie", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_summary_without_month_is_all() {
        let config = parse_args_from(&["sophie", "--summary"]).unwrap();
        assert_eq!(config.summary.as_deref(), Some(SUMMARY_ALL));
        assert_eq!(
            config_to_command(config).unwrap(),
            SophieCommand::Summary { month: None }
        );
    }

    #[test]
    fn test_summary_with_month() {
        let config = parse_args_from(&["sophie", "--summary", "2026-10"]).unwrap();
        assert_eq!(
            config_to_command(config).unwrap(),
            SophieCommand::Summary {
                month: Some(YearMonth { year: 2026, month: 10 })
            }
        );
    }

    #[test]
    fn test_summary_with_invalid_month_is_usage_error() {
        let config = parse_args_from(&["sophie", "--summary=octubre"]).unwrap();
        let err = config_to_command(config).unwrap_err();
        assert!(err.is_usage());
    }
}
