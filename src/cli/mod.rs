//! One-shot driver: feed a single message through the report core and print
//! the reply units. The messaging transport proper lives outside this crate;
//! this binary stands in for it during local runs and scripting.

pub mod output;

use std::env;
use std::path::PathBuf;

use crate::config::ConfigManager;
use crate::errors::ReportError;
use crate::report;

const USAGE: &str = "usage: leo_report_cli [--config <path>] [--plain] \"<command>\"";

struct CliArgs {
    command: String,
    config_path: Option<PathBuf>,
    plain: bool,
}

pub fn run_cli() -> Result<(), ReportError> {
    let args = parse_args(env::args().skip(1))?;
    if args.plain {
        output::set_preferences(output::OutputPreferences { plain_mode: true });
    }

    let manager = match args.config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    if !manager.path().exists() {
        output::warning(format!(
            "No configuration at {}; using defaults.",
            manager.path().display()
        ));
    }
    let config = manager.load()?;

    let replies = report::respond(&config, &args.command);
    for (idx, reply) in replies.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("{}", reply);
    }
    Ok(())
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, ReportError> {
    let mut command = None;
    let mut config_path = None;
    let mut plain = false;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args.next().ok_or_else(|| {
                    ReportError::InvalidArguments("--config requires a path".into())
                })?;
                config_path = Some(PathBuf::from(value));
            }
            "--plain" => plain = true,
            _ if command.is_none() => command = Some(arg),
            _ => return Err(ReportError::InvalidArguments(USAGE.into())),
        }
    }

    let command = command.ok_or_else(|| ReportError::InvalidArguments(USAGE.into()))?;
    Ok(CliArgs {
        command,
        config_path,
        plain,
    })
}
