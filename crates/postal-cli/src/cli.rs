//! CLI argument definitions for the postal-code cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "postal-clean",
    version,
    about = "Validate and normalize a postal-code table",
    long_about = "Validate and normalize a flat table of postal-code records.\n\n\
                  Rows are split into a cleaned CSV and a rejected CSV annotated\n\
                  with rejection reasons (missing postal code, lat/lon not numeric,\n\
                  out of bounds)."
)]
pub struct Cli {
    /// Path to the source postal-code CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory for the cleaned files (default: <INPUT dir>/clean).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Explicit path for the accepted stream (overrides --output-dir naming).
    #[arg(long = "accepted", value_name = "PATH")]
    pub accepted: Option<PathBuf>,

    /// Explicit path for the rejected stream (overrides --output-dir naming).
    #[arg(long = "rejected", value_name = "PATH")]
    pub rejected: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the accepted and rejected output paths.
    ///
    /// Defaults follow the original data layout: `<stem>.cleaned.csv` and
    /// `<stem>.bad.csv` inside the output directory.
    #[must_use]
    pub fn resolved_output_paths(&self) -> (PathBuf, PathBuf) {
        let output_dir = self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .map(|dir| dir.join("clean"))
                .unwrap_or_else(|| PathBuf::from("clean"))
        });
        let stem = self
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "postal_codes".to_string());

        let accepted = self
            .accepted
            .clone()
            .unwrap_or_else(|| output_dir.join(format!("{stem}.cleaned.csv")));
        let rejected = self
            .rejected
            .clone()
            .unwrap_or_else(|| output_dir.join(format!("{stem}.bad.csv")));
        (accepted, rejected)
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
