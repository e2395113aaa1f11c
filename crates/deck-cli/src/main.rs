//! decksmith command-line tool.

use clap::{ColorChoice, Parser};
use deck_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;
mod types;

use crate::cli::{CardCommand, Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_card_add, run_card_list, run_card_remove, run_export, run_generate, run_new, run_stats,
    run_validate,
};
use crate::summary::{print_export_summary, print_generate_summary, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::New(args) => match run_new(&args) {
            Ok(path) => {
                println!("Created {}", path.display());
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Card(CardCommand::Add(args)) => match run_card_add(&args) {
            Ok(number) => {
                println!("Added card #{number}: {}", args.name.trim());
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Card(CardCommand::Remove(args)) => match run_card_remove(&args) {
            Ok(card) => {
                println!("Removed card #{}: {}", args.number, card.name);
                0
            }
            Err(error) => report_error(&error),
        },
        Command::Card(CardCommand::List(args)) => match run_card_list(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Stats => match run_stats() {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Validate(args) => match run_validate(&args) {
            Ok(report) => {
                print_report(&report);
                if report.has_errors() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
        Command::Generate(args) => match run_generate(&args) {
            Ok(result) => {
                print_generate_summary(&result);
                if result.is_blocked() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
        Command::Export(args) => match run_export(&args) {
            Ok(result) => {
                print_export_summary(&result, args.show_log);
                if result.has_errors() { 1 } else { 0 }
            }
            Err(error) => report_error(&error),
        },
    };
    std::process::exit(exit_code);
}

fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
