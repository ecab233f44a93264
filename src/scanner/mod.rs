mod directory;
mod types;

pub use directory::DirectoryScanner;
pub use types::{ScanPlan, SourceFile};
