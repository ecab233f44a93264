use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SlocCountError};
use crate::language::CommentSyntax;

use super::{ClassificationState, LineClassifier, LineKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Code => self.code += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Blank => self.blank += 1,
        }
    }
}

pub struct SlocCounter<'a> {
    classifier: LineClassifier<'a>,
}

impl<'a> SlocCounter<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            classifier: LineClassifier::new(syntax),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let mut stats = LineStats::new();
        let mut state = ClassificationState::new();

        for line in source.split_inclusive('\n').flat_map(chunk_lines) {
            stats.record(self.classifier.classify(line, &mut state));
        }

        stats
    }

    /// Count lines from a buffered reader.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD rather than failing the file.
    ///
    /// # Errors
    /// Returns an I/O error if reading from the reader fails.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut stats = LineStats::new();
        let mut state = ClassificationState::new();
        let mut buffer = Vec::with_capacity(8 * 1024);

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buffer);
            for line in chunk_lines(&text) {
                stats.record(self.classifier.classify(line, &mut state));
            }
        }

        Ok(stats)
    }

    /// Count the lines of the file at `path`.
    ///
    /// # Errors
    /// Returns [`SlocCountError::FileRead`] if the file cannot be opened or read.
    pub fn count_file(&self, path: &Path) -> Result<LineStats> {
        let file_read = |source| SlocCountError::FileRead {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(file_read)?;
        self.count_reader(BufReader::new(file)).map_err(file_read)
    }
}

/// Physical lines of one `\n`-terminated chunk, where a lone `\r` also ends
/// a line.
fn chunk_lines(chunk: &str) -> std::str::Split<'_, char> {
    let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
    let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);
    chunk.split('\r')
}

#[cfg(test)]
#[path = "sloc_tests.rs"]
mod tests;
