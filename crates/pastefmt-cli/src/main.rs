//! pastefmt CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use pastefmt_cli::cli::{Cli, Command, ConfigAction};
use pastefmt_cli::commands::{self, ago::AgoOptions, truncate::TruncateOptions};
use pastefmt_cli::config::CliConfig;
use pastefmt_cli::error::{CliError, CliResult};
use pastefmt_core::{LengthUnit, TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    let config = if cli.config.is_some() {
        CliConfig::load_from(&config_path)
    } else {
        CliConfig::load()
    }
    .map_err(CliError::Config)?;

    init_tracing(TracingConfig::for_cli(cli.debug || config.debug))?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Ago {
            timestamps,
            now,
            strict,
            json,
        } => {
            let options = AgoOptions {
                now: commands::ago::reference_time(now)?,
                strict: strict || config.relative.strict,
                json,
            };
            commands::ago::run(&mut out, &timestamps, options)
        }
        Command::Truncate {
            text,
            limit,
            utf16,
            json,
        } => {
            let options = TruncateOptions {
                limit: commands::truncate::resolve_limit(limit, config.truncate.default_limit),
                unit: if utf16 {
                    LengthUnit::Utf16
                } else {
                    config.truncate.unit
                },
                json,
            };
            commands::truncate::run(&mut out, text.as_deref(), io::stdin().lock(), options)
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&mut out, &config, &config_path),
            ConfigAction::Validate => commands::config::validate(&mut out, &config),
            ConfigAction::Path => commands::config::path(&mut out, &config_path),
        },
    }
}
