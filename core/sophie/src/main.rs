mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::{RawMessage, SophieCommand};
use ports::inbound::{ProcessMessage, ReportExpenses, UseCaseRunner};
use wiring::{wire_sophie, App};

/// 不完全な結果行に付ける印
const INCOMPLETE_MARK: &str = "(incompleto)";

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    /// 要約を stdout に出す。ProcessError は記録済みの行を出したうえで終了コードにする。
    fn process(
        &self,
        message: String,
        profile: Option<ProviderName>,
        model: Option<ModelName>,
    ) -> Result<i32, Error> {
        if message.trim().is_empty() {
            return Err(Error::invalid_argument(
                "No message provided. Use --summary to show recorded expenses.",
            ));
        }
        let assembler = self
            .app
            .process_use_case(profile.as_ref(), model.as_ref())?;
        match assembler.process(&RawMessage::new(message)) {
            Ok(summary) => {
                println!("{}", summary);
                Ok(0)
            }
            Err(e) => {
                // 記録済みの行は印を付けて出す
                for line in e.completed() {
                    println!("{} {}", line, INCOMPLETE_MARK);
                }
                eprintln!("sophie: {}", e);
                Ok(e.exit_code())
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(config)?;
        let command_name = cmd.name();
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            SophieCommand::Help => {
                print_help();
                Ok(0)
            }
            SophieCommand::Summary { month } => self
                .app
                .report_use_case()
                .monthly_report(month)
                .map(|report| {
                    println!("{}", report.render());
                    0
                }),
            SophieCommand::Process {
                message,
                profile,
                model,
            } => self.process(message, profile, model),
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            let _ = self.app.logger.log(
                &LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("sophie: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_sophie()?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: sophie [options] <message...>");
}

fn print_help() {
    println!("Usage: sophie [options] <message...>");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -p, --profile <profile>   Specify LLM profile (openai, openrouter, openai_compat, echo, or a name from config.json).");
    println!("                            Default: default_provider in config.json, or openai.");
    println!("  -m, --model <model>       Specify model name (e.g. gpt-4o-mini). Default: profile model.");
    println!("  --summary [YYYY-MM]       Show recorded expenses for a month (all months when omitted).");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish).");
    println!();
    println!("Environment:");
    println!("  SOPHIE_HOME       Home directory (config.json, logs/). Default: $XDG_CONFIG_HOME/sophie or ~/.config/sophie.");
    println!("  SOPHIE_DATA_DIR   Where gastos.csv and estudio/ are written. Default: $SOPHIE_HOME/data.");
    println!("  SOPHIE_TZ         Time zone for hoy / mañana / pasado mañana. Default: America/Santiago.");
    println!("  OPENAI_API_KEY    API key for the openai profile (see api_key_env in config.json).");
    println!();
    println!("Description:");
    println!("  Detects expenses ([Lawrence]) and Japanese study plans ([Haru]) in a free-text message,");
    println!("  extracts their fields with the LLM and records them.");
    println!();
    println!("Examples:");
    println!("  sophie \"Mañana quiero comerme un combo cuarto de libra (\\$4.500) y después repasar kanjis.\"");
    println!("  sophie -p echo hoy fui al supermercado");
    println!("  sophie --summary 2026-10");
}
