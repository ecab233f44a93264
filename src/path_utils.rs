use std::path::Path;

use crate::stats::ROOT_DIRECTORY;

/// Name under which `dir` is grouped in the tally.
///
/// - `dir` is made relative to `root`; the root itself becomes [`ROOT_DIRECTORY`].
/// - Separators are normalized to forward slashes for consistent output.
/// - A path outside `root` is returned as-is with normalized separators.
#[must_use]
pub fn relative_directory(dir: &Path, root: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    let result = normalize_separators(&relative.to_string_lossy());

    if result.is_empty() || result == "." {
        ROOT_DIRECTORY.to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
