use serde::Serialize;

use crate::cocomo::{CostMetrics, estimate};

use super::tally::{LanguageCounts, SlocTally};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryRow {
    pub directory: String,
    pub total: usize,
    /// Dominant language first.
    pub languages: Vec<LanguageCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageRow {
    pub language: String,
    pub lines: usize,
    pub percent: f64,
}

/// Ordered, display-ready view of a [`SlocTally`].
#[derive(Debug, Clone, PartialEq)]
pub struct SlocReport {
    /// Sorted by directory name.
    pub directories: Vec<DirectoryRow>,
    /// Dominant language first.
    pub languages: Vec<LanguageRow>,
    pub total_sloc: usize,
    pub cocomo: CostMetrics,
}

impl SlocReport {
    #[must_use]
    pub fn from_tally(tally: &SlocTally) -> Self {
        let mut directories: Vec<DirectoryRow> = tally
            .directories()
            .map(|(directory, cells)| DirectoryRow {
                directory: directory.to_string(),
                total: cells.values().sum(),
                languages: sorted_by_count(cells),
            })
            .collect();
        directories.sort_by(|a, b| a.directory.cmp(&b.directory));

        let total_sloc: usize = directories.iter().map(|d| d.total).sum();

        let languages = sorted_by_count(tally.languages())
            .into_iter()
            .map(|entry| LanguageRow {
                percent: percentage(entry.lines, total_sloc),
                language: entry.language,
                lines: entry.lines,
            })
            .collect();

        Self {
            directories,
            languages,
            total_sloc,
            cocomo: estimate(total_sloc),
        }
    }
}

/// `count` as a percentage of `total`; `0.0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Descending by line count; equal counts keep their first-seen order.
fn sorted_by_count(counts: &LanguageCounts) -> Vec<LanguageCount> {
    let mut entries: Vec<LanguageCount> = counts
        .iter()
        .map(|(language, &lines)| LanguageCount {
            language: language.clone(),
            lines,
        })
        .collect();
    entries.sort_by(|a, b| b.lines.cmp(&a.lines));
    entries
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
