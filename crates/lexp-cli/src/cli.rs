//! CLI argument definitions for the life expectancy cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use lexp_cli::pipeline::{CleanOptions, DEFAULT_DATA_DIR};

#[derive(Parser)]
#[command(
    name = "lexp",
    version,
    about = "Clean the Eurostat life expectancy dataset for one country",
    long_about = "Reshape the raw Eurostat life expectancy table from wide to long format,\n\
                  strip footnote flags, and write the rows of a single country to\n\
                  <DATA_DIR>/cleaned/life_expectancy_<CODE>.csv."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the dataset for one country and write the result as CSV.
    Clean(CleanArgs),

    /// List the valid country codes.
    Countries,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Country code to keep (case-insensitive, e.g. PT).
    #[arg(long = "country", value_name = "CODE")]
    pub country: String,

    /// Raw dataset (.tsv, .csv or .json). Relative names are also looked up
    /// inside the data directory.
    #[arg(long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory holding the raw dataset and the cleaned/ output folder.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "LEXP_DATA_DIR",
        default_value = DEFAULT_DATA_DIR
    )]
    pub data_dir: PathBuf,

    /// Output file (default: <DATA_DIR>/cleaned/life_expectancy_<CODE>.csv).
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl CleanArgs {
    pub fn to_options(&self) -> CleanOptions {
        CleanOptions {
            country: self.country.clone(),
            input: self.input.clone(),
            data_dir: self.data_dir.clone(),
            output: self.output.clone(),
            dry_run: self.dry_run,
        }
    }
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
