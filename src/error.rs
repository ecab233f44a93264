use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlocCountError {
    #[error("Usage: sloccount <source_directory>")]
    Usage,

    #[error("Directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Tally mismatch for {key}: expected {expected}, got {actual}")]
    TallyMismatch {
        key: String,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SlocCountError {
    /// Short, stable name of the error kind.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Usage => "Usage",
            Self::RootNotFound { .. } => "RootNotFound",
            Self::FileRead { .. } => "FileRead",
            Self::TallyMismatch { .. } => "TallyMismatch",
            Self::WorkerPool(_) => "WorkerPool",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, SlocCountError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
