use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar shown on stderr while files are counted.
///
/// Hidden in quiet mode or when stderr is not a TTY, so report output on
/// stdout stays clean.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counted: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::visible_bar(total)
        };

        Self {
            progress_bar,
            counted: Arc::new(AtomicU64::new(0)),
        }
    }

    fn visible_bar(total: u64) -> ProgressBar {
        let bar = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} Counting [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%)")
        {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar
    }

    /// Record one more counted file. Safe to call from rayon workers.
    pub fn inc(&self) {
        let count = self.counted.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
