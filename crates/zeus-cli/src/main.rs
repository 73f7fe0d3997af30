//! zeus: newspaper lookups and notice quotes from the command line.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;
use zeus_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use zeus_cli::commands::{
    run_batch, run_directory, run_hash_key, run_postcode, run_publication, run_publications,
    run_quote,
};
use zeus_cli::logging::{LogConfig, LogFormat, init_logging};
use zeus_cli::{EXIT_SUCCESS, Session, exit_code};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            EXIT_SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            exit_code(&error)
        }
    };
    std::process::exit(exit);
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Postcode { postcode } => run_postcode(postcode),
        Command::HashKey { key } => Ok(run_hash_key(key)),
        Command::Publications(args) => run_publications(&open_session(cli)?, args),
        Command::Quote(args) => run_quote(&open_session(cli)?, args),
        Command::Publication { id } => run_publication(&open_session(cli)?, id),
        Command::Batch { ids } => run_batch(&open_session(cli)?, ids),
        Command::Directory { json } => run_directory(&open_session(cli)?, *json),
    }
}

fn open_session(cli: &Cli) -> anyhow::Result<Session> {
    Session::open(&cli.config, cli.directory.as_deref(), cli.api_key.clone())
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
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
