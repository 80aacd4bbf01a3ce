//! vulnscan CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use vulnscan_cli::logging::{LogConfig, LogFormat, init_logging};
use vulnscan_cli::types::RunOutcome;
use vulnscan_model::ReportProfile;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_clean, run_columns, run_host_summary, run_rotate_keys, run_split_pci, run_summary,
};
use crate::summary::{print_rotation_summary, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Command::Clean(args) => report(run_clean(args, &profile(cli)?)),
        Command::Summary(args) => report(run_summary(args, &profile(cli)?)),
        Command::HostSummary(args) => report(run_host_summary(args, &profile(cli)?)),
        Command::SplitPci(args) => report(run_split_pci(args, &profile(cli)?)),
        Command::RotateKeys(args) => {
            let result = run_rotate_keys(args)?;
            print_rotation_summary(&result);
            Ok(())
        }
        Command::Columns => run_columns(),
    }
}

fn profile(cli: &Cli) -> anyhow::Result<ReportProfile> {
    Ok(ReportProfile::resolve(cli.profile.as_deref())?)
}

fn report(result: anyhow::Result<RunOutcome>) -> anyhow::Result<()> {
    let outcome = result?;
    print_summary(&outcome);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
