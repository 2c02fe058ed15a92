//! CLI argument definitions for csv2struct.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use csv2struct_model::CaseStrategy;

#[derive(Parser)]
#[command(
    name = "csv2struct",
    version,
    about = "Generate serde-ready Rust structs from sample CSV files",
    long_about = "Generate a Rust struct declaration from a CSV file.\n\n\
                  Samples the header row and the first data row, infers a scalar\n\
                  type per column, normalizes header names under a selectable\n\
                  casing strategy, and emits a struct compatible with the csv\n\
                  and serde crates."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a struct declaration from a sample CSV file.
    Generate(GenerateArgs),

    /// List the supported header casing strategies.
    Cases,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path of the CSV file to sample.
    #[arg(long = "from", short = 'f', value_name = "CSV")]
    pub from: PathBuf,

    /// Path of the .rs file to write.
    #[arg(long = "to", short = 't', value_name = "RS")]
    pub to: PathBuf,

    /// Name of the emitted struct.
    #[arg(
        long = "type-name",
        short = 'n',
        value_name = "NAME",
        default_value = ""
    )]
    pub type_name: String,

    /// Field separator (a single ASCII character).
    #[arg(long = "separator", short = 's', value_name = "CHAR", default_value = ",")]
    pub separator: char,

    /// Casing strategy of the source headers (pascal, camel, kebab, snake, space).
    #[arg(
        long = "case",
        short = 'c',
        value_name = "CASE",
        default_value = "pascal",
        value_parser = CaseStrategy::parse
    )]
    pub case: CaseStrategy,

    /// Skip running rustfmt on the generated file.
    #[arg(long = "no-format")]
    pub no_format: bool,

    /// Print the generated source to stdout without writing any file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
