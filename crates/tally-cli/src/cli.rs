//! CLI argument definitions for the report renderer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Render role-filtered line-item reports as CSV or HTML",
    long_about = "Render a line-item report from a JSON request document.\n\n\
                  Standard viewers see items valued up to 500; admins see every item\n\
                  and mark items above 1000 as priority."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -vvv for trace, -q for errors only).
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
    /// Render a report from a request document and print it to stdout.
    Render(RenderArgs),

    /// List the recognized report formats.
    Formats,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// JSON request with `user` and `items` ("-" reads stdin).
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Report format token (CSV or HTML, case-sensitive).
    ///
    /// Any other token renders an empty report.
    #[arg(long = "format", value_name = "TOKEN", default_value = "CSV")]
    pub format: String,

    /// Entity-encode names and values in HTML output.
    #[arg(long = "escape-html")]
    pub escape_html: bool,

    /// Quote CSV fields that contain commas, quotes or newlines.
    #[arg(long = "quote-csv")]
    pub quote_csv: bool,

    /// Print a summary table to stderr after the report.
    #[arg(long = "summary")]
    pub summary: bool,
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
