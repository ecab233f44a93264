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
#[command(name = "sloccount")]
#[command(author, version, about = "Count physical source lines of code and estimate effort")]
#[command(long_about = "Walks a source tree, counts physical source lines of code per \
    directory and language, and prints a Basic COCOMO effort and cost estimate.\n\n\
    Exit codes:\n  \
    0 - Report printed\n  \
    1 - Usage error, missing directory or runtime error")]
pub struct Cli {
    /// Root of the source tree to count
    #[arg(value_name = "SOURCE_DIRECTORY")]
    pub paths: Vec<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Control color output (text format only)
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostics on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Number of worker threads used to count files
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

impl Cli {
    /// The single source directory, or `None` when not exactly one was given.
    #[must_use]
    pub fn source_directory(&self) -> Option<&PathBuf> {
        match self.paths.as_slice() {
            [root] => Some(root),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
