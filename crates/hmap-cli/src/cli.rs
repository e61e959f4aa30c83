//! CLI argument definitions for the header mapper.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "header-mapper",
    version,
    about = "Map CSV column headers onto a template schema",
    long_about = "Map the column headers of a CSV file onto a fixed template \
                  schema.\n\n\
                  An external language model proposes the header mapping; the \
                  result is reconciled deterministically and the renamed, \
                  reordered file is written out."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP upload service.
    Serve(ServeArgs),

    /// Map a single CSV file offline.
    Map(MapArgs),

    /// List the template headers.
    Template(TemplateArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Address to bind.
    #[arg(long = "host", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long = "port", default_value_t = 3333)]
    pub port: u16,

    #[command(flatten)]
    pub oracle: OracleArgs,

    #[command(flatten)]
    pub template: TemplateArgs,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub oracle: OracleArgs,

    #[command(flatten)]
    pub template: TemplateArgs,
}

#[derive(Parser)]
pub struct OracleArgs {
    /// Model to consult for the header mapping.
    #[arg(long = "model", default_value = "gemini-1.5-flash")]
    pub model: String,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// CSV file whose first record lists the template headers
    /// (default: built-in contract template).
    #[arg(long = "template", value_name = "CSV")]
    pub template: Option<PathBuf>,
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
