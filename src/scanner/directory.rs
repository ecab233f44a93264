use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use super::{ScanPlan, SourceFile};
use crate::counter::SlocCounter;
use crate::error::{Result, SlocCountError};
use crate::language::LanguageRegistry;
use crate::output::ScanProgress;
use crate::path_utils::relative_directory;
use crate::stats::{ROOT_DIRECTORY, SlocTally};

/// Walks a directory tree and tallies SLOC per directory and language.
pub struct DirectoryScanner<'r> {
    registry: &'r LanguageRegistry,
    verbose: u8,
    quiet: bool,
}

impl<'r> DirectoryScanner<'r> {
    #[must_use]
    pub const fn new(registry: &'r LanguageRegistry) -> Self {
        Self {
            registry,
            verbose: 0,
            quiet: true,
        }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Show a progress bar on stderr while counting (only on a TTY).
    #[must_use]
    pub const fn with_progress(mut self, show: bool) -> Self {
        self.quiet = !show;
        self
    }

    /// Scan `root` and return the resulting tally.
    ///
    /// Every file is counted into its own tally on the current rayon pool and
    /// the tallies are merged in walk order, so the result does not depend on
    /// the number of workers. The root and every directory holding at least
    /// one recognised file are present in the tally, even with no SLOC.
    ///
    /// # Errors
    /// Returns [`SlocCountError::RootNotFound`] if `root` is not a directory.
    pub fn scan(&self, root: &Path) -> Result<SlocTally> {
        let started = Instant::now();
        let plan = self.walk(root)?;

        let progress = ScanProgress::new(plan.files.len() as u64, self.quiet);
        let skipped = AtomicUsize::new(0);
        let counted = plan
            .files
            .par_iter()
            .map(|file| {
                let tally = self.count_file(file, &skipped);
                progress.inc();
                tally
            })
            .reduce(SlocTally::new, |mut left, right| {
                left.merge(&right);
                left
            });
        progress.finish();

        let mut tally = SlocTally::new();
        tally.add_directory(ROOT_DIRECTORY);
        tally.merge(&counted);

        if self.verbose > 0 {
            let skipped = skipped.into_inner();
            eprintln!(
                "Counted {} files in {} directories ({} unsupported, {} unreadable) in {:.2?}",
                plan.files.len() - skipped,
                plan.directories,
                plan.unsupported,
                skipped,
                started.elapsed()
            );
        }

        Ok(tally)
    }

    fn count_file(&self, file: &SourceFile<'_>, skipped: &AtomicUsize) -> SlocTally {
        let mut tally = SlocTally::new();
        tally.add_directory(&file.directory);

        let counter = SlocCounter::new(&file.language.comment_syntax);
        match counter.count_file(&file.path) {
            Ok(stats) => tally.record(&file.directory, &file.language.name, stats.sloc()),
            Err(e) => {
                skipped.fetch_add(1, Ordering::Relaxed);
                if self.verbose > 0 {
                    eprintln!("Warning: skipping {e}");
                }
            }
        }
        tally
    }

    /// Enumerate supported files under `root`, in file-name order.
    ///
    /// Symbolic links to directories are not followed; links to regular
    /// files are counted like the files they point to. Unreadable entries
    /// are skipped.
    ///
    /// # Errors
    /// Returns [`SlocCountError::RootNotFound`] if `root` is not a directory.
    pub fn walk(&self, root: &Path) -> Result<ScanPlan<'r>> {
        if !root.is_dir() {
            return Err(SlocCountError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut plan = ScanPlan::default();
        let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if self.verbose > 0 {
                        eprintln!("Warning: {e}");
                    }
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                plan.directories += 1;
            } else if is_regular_file(&entry) {
                self.plan_file(&mut plan, entry.path(), root);
            }
        }

        Ok(plan)
    }

    fn plan_file(&self, plan: &mut ScanPlan<'r>, path: &Path, root: &Path) {
        let registry: &'r LanguageRegistry = self.registry;
        let file_name = path.file_name().map(|n| n.to_string_lossy());
        let Some(language) = file_name.and_then(|name| registry.resolve(&name)) else {
            plan.unsupported += 1;
            if self.verbose > 1 {
                eprintln!("Skipping unsupported file: {}", path.display());
            }
            return;
        };

        let parent = path.parent().unwrap_or(root);
        plan.files.push(SourceFile {
            path: path.to_path_buf(),
            directory: relative_directory(parent, root),
            language,
        });
    }
}

/// A regular file, or a symbolic link that resolves to one.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
