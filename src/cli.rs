use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linetally")]
#[command(
    author,
    version,
    about = "Count blank, comment and code lines, plus import and declaration lines"
)]
#[command(long_about = "Classify every line of the given source files as blank, comment or code, \
    and count import, class, interface and function declarations among the code lines.\n\n\
    A single file argument prints a per-file report; a directory or several paths print \
    aggregated totals.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Usage, configuration or runtime error")]
pub struct Cli {
    /// Files or directories to count
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Append a per-language breakdown to aggregated totals
    #[arg(long)]
    pub by_language: bool,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Suppress warnings and notes
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
