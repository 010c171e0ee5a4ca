//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nestory",
    version,
    about = "Nestory interchange - export, import, and map inventory data",
    long_about = "Export inventories to portable JSON/CSV archives, re-import them \
                  with validation, and map third-party spreadsheet columns onto the \
                  canonical item schema."
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
    /// Show an archive's metadata and record counts without importing it.
    Inspect(InspectArgs),

    /// Analyze spreadsheet headers and show the suggested column mapping.
    Analyze(AnalyzeArgs),

    /// Convert a third-party spreadsheet into a Nestory archive.
    Convert(ConvertArgs),

    /// Validate an archive and report per-record errors.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to a Nestory JSON archive.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to a CSV spreadsheet.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to a CSV spreadsheet.
    #[arg(value_name = "SHEET")]
    pub sheet: PathBuf,

    /// Directory the archive is written into (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write a CSV re-export of the imported items.
    #[arg(long = "with-csv")]
    pub with_csv: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to a Nestory JSON archive.
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
