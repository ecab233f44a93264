use std::path::PathBuf;

use crate::language::Language;

/// A file that resolved to a known language.
#[derive(Debug, Clone)]
pub struct SourceFile<'r> {
    pub path: PathBuf,
    /// Owning directory, relative to the scan root.
    pub directory: String,
    pub language: &'r Language,
}

/// Everything the walk found, in walk order.
#[derive(Debug, Clone, Default)]
pub struct ScanPlan<'r> {
    /// Number of directories visited, the root included.
    pub directories: usize,
    pub files: Vec<SourceFile<'r>>,
    /// Regular files skipped because no language matched.
    pub unsupported: usize,
}
