//! CLI argument definitions for the survey document tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-doc",
    version,
    about = "Survey document engine - inspect and rework flat form definitions",
    long_about = "Inspect and rework survey documents stored as flat row lists.\n\n\
                  Resolves question paths, extracts questions and groups into\n\
                  reusable library assets, imports pasted cascading-select tables,\n\
                  and reports locking restrictions."
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
    /// Resolve and print the full path of every question.
    Paths(PathsArgs),

    /// Flatten questions with labels and group context.
    Summary(SummaryArgs),

    /// Extract a question or group into a standalone library asset.
    Extract(ExtractArgs),

    /// Parse a pasted cascading-select table and optionally splice it in.
    Cascade(CascadeArgs),

    /// Report locking profiles and active restrictions.
    Locks(LocksArgs),
}

#[derive(Parser)]
pub struct PathsArgs {
    /// Path to the document JSON file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Also record a path for every group marker.
    #[arg(long = "include-groups")]
    pub include_groups: bool,

    /// Treat auto-populated meta rows as questions.
    #[arg(long = "include-meta")]
    pub include_meta: bool,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// Path to the document JSON file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Translation to resolve labels in (default: first declared language).
    #[arg(long = "language", value_name = "NAME")]
    pub language: Option<String>,

    /// Treat auto-populated meta rows as questions.
    #[arg(long = "include-meta")]
    pub include_meta: bool,
}

#[derive(Parser)]
pub struct ExtractArgs {
    /// Path to the document JSON file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Identity of the question to extract.
    #[arg(long = "question", value_name = "NAME", conflicts_with = "group")]
    pub question: Option<String>,

    /// Identity of the group to extract (whole subtree).
    #[arg(long = "group", value_name = "NAME")]
    pub group: Option<String>,

    /// Write the extracted asset here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CascadeArgs {
    /// Path to the document JSON file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// File holding the pasted table (tab- or comma-delimited).
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// Splice after this row identity (default: end of document).
    #[arg(long = "after", value_name = "NAME")]
    pub after: Option<String>,

    /// Apply the splice and write the updated document.
    #[arg(long = "apply", requires = "output")]
    pub apply: bool,

    /// Where to write the updated document when applying.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct LocksArgs {
    /// Path to the document JSON file.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
