use indexmap::IndexMap;

use crate::error::{Result, SlocCountError};

/// Directory name reported for the scan root itself.
pub const ROOT_DIRECTORY: &str = "top_dir";

/// Language tag → SLOC, in first-seen order.
pub type LanguageCounts = IndexMap<String, usize>;

/// SLOC grouped by directory and by language.
///
/// Directories and languages keep their first-seen order so that ties in the
/// report are broken deterministically. Every cell added to a directory is
/// added to the language totals as well; [`SlocTally::check_consistency`]
/// verifies that both views agree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlocTally {
    directories: IndexMap<String, LanguageCounts>,
    languages: LanguageCounts,
}

impl SlocTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory so it is reported even when nothing is counted in it.
    pub fn add_directory(&mut self, directory: &str) {
        if !self.directories.contains_key(directory) {
            self.directories
                .insert(directory.to_string(), LanguageCounts::new());
        }
    }

    /// Add `sloc` lines of `language` to `directory`. Zero counts are ignored.
    pub fn record(&mut self, directory: &str, language: &str, sloc: usize) {
        if sloc == 0 {
            return;
        }
        self.add_directory(directory);
        if let Some(cells) = self.directories.get_mut(directory) {
            *cells.entry(language.to_string()).or_insert(0) += sloc;
        }
        *self.languages.entry(language.to_string()).or_insert(0) += sloc;
    }

    /// Fold `other` into `self`, cell by cell.
    pub fn merge(&mut self, other: &Self) {
        for (directory, cells) in &other.directories {
            self.add_directory(directory);
            for (language, &sloc) in cells {
                self.record(directory, language, sloc);
            }
        }
    }

    pub fn directories(&self) -> impl Iterator<Item = (&str, &LanguageCounts)> {
        self.directories.iter().map(|(dir, cells)| (dir.as_str(), cells))
    }

    #[must_use]
    pub fn directory(&self, directory: &str) -> Option<&LanguageCounts> {
        self.directories.get(directory)
    }

    #[must_use]
    pub const fn languages(&self) -> &LanguageCounts {
        &self.languages
    }

    #[must_use]
    pub fn count(&self, directory: &str, language: &str) -> usize {
        self.directories
            .get(directory)
            .and_then(|cells| cells.get(language))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn language_total(&self, language: &str) -> usize {
        self.languages.get(language).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn directory_total(&self, directory: &str) -> usize {
        self.directories
            .get(directory)
            .map_or(0, |cells| cells.values().sum())
    }

    /// Sum of every directory's SLOC.
    #[must_use]
    pub fn grand_total(&self) -> usize {
        self.directories
            .values()
            .flat_map(|cells| cells.values())
            .sum()
    }

    /// Check that the per-directory cells and the language totals agree.
    ///
    /// # Errors
    /// Returns [`SlocCountError::TallyMismatch`] for the first language whose
    /// total differs from the sum of its directory cells, or for the grand
    /// total when the two views disagree overall.
    pub fn check_consistency(&self) -> Result<()> {
        let mut from_directories = LanguageCounts::new();
        for cells in self.directories.values() {
            for (language, &sloc) in cells {
                *from_directories.entry(language.clone()).or_insert(0) += sloc;
            }
        }

        for (language, &expected) in &from_directories {
            let actual = self.language_total(language);
            if actual != expected {
                return Err(SlocCountError::TallyMismatch {
                    key: language.clone(),
                    expected,
                    actual,
                });
            }
        }

        let expected = self.grand_total();
        let actual: usize = self.languages.values().sum();
        if actual != expected {
            return Err(SlocCountError::TallyMismatch {
                key: "total".to_string(),
                expected,
                actual,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
