//! CLI argument definitions for the portfolio harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Portfolio view-state harness - inspect content and replay page interactions",
    long_about = "Inspect the portfolio content table and drive the view-state core \
                  without a browser.\n\n\
                  Replay scripts describe a measured page layout and a timed list of \
                  scroll, resize, carousel and navigation events."
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
    /// Print the content table: profile summary, projects, experience and skills.
    Content(ContentArgs),

    /// Resolve a smart-search query to the section it navigates to.
    Search(SearchArgs),

    /// Drive the page through a recorded event script.
    Replay(ReplayArgs),
}

#[derive(Parser)]
pub struct ContentArgs {
    /// Content table JSON (default: the bundled table).
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Free-text query, e.g. "show me your projects".
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Replay script (JSON with `layout` and `events`).
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// View configuration TOML (default: built-in defaults).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Content table JSON (default: the bundled table).
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Output format for the change log and final snapshot.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
