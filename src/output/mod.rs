mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::ScanProgress;
pub use text::{ColorMode, TextFormatter, group_thousands};

use crate::error::Result;
use crate::stats::SlocReport;

/// Renders a finished [`SlocReport`].
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &SlocReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
