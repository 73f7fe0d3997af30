//! CLI argument definitions for the zeus quoting tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "zeus",
    version,
    about = "Find newspapers covering a postcode and quote notice costs",
    long_about = "Find the newspapers whose circulation covers a UK postcode and \
                  estimate what a classified notice costs in each.\n\n\
                  Publications are read from a JSON or CSV directory export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include raw postcodes in logs instead of redacting them.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file.
    #[arg(
        long = "config",
        value_name = "PATH",
        env = "ZEUS_CONFIG",
        default_value = "zeus.toml",
        global = true
    )]
    pub config: PathBuf,

    /// Publications directory export (.json or .csv). Overrides the config file.
    #[arg(
        long = "directory",
        value_name = "PATH",
        env = "ZEUS_DIRECTORY",
        global = true
    )]
    pub directory: Option<PathBuf>,

    /// API key for publication lookups. A `Bearer <key>` value is also accepted.
    #[arg(
        long = "api-key",
        value_name = "KEY",
        env = "ZEUS_API_KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a postcode and show its outcode, district and sector.
    Postcode {
        #[arg(value_name = "POSTCODE")]
        postcode: String,
    },

    /// List publications whose circulation covers a postcode.
    Publications(PublicationsArgs),

    /// Quote a notice in every publication covering a postcode.
    Quote(QuoteArgs),

    /// Show one publication by id.
    Publication {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show several publications by id (case-insensitive).
    Batch {
        #[arg(value_name = "ID", required = true)]
        ids: Vec<String>,
    },

    /// List the whole directory sorted by name, flagging unpriceable entries.
    Directory {
        /// Print JSON instead of a table.
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the SHA-256 digest to configure for an API key.
    HashKey {
        #[arg(value_name = "KEY")]
        key: String,
    },
}

#[derive(Args, Default)]
pub struct PublicationsArgs {
    #[arg(value_name = "POSTCODE")]
    pub postcode: String,

    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Default)]
pub struct QuoteArgs {
    /// Postcode the notice concerns.
    #[arg(
        value_name = "POSTCODE",
        required_unless_present = "body",
        conflicts_with = "body"
    )]
    pub postcode: Option<String>,

    /// Length of the notice in characters.
    #[arg(
        long = "chars",
        value_name = "N",
        required_unless_present = "body",
        conflicts_with = "body"
    )]
    pub chars: Option<u64>,

    /// Raw request body: `{"postcode": "...", "charCount": N}`.
    #[arg(long = "body", value_name = "JSON")]
    pub body: Option<String>,

    /// Print JSON keyed by publication id instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
