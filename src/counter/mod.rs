mod classifier;
mod sloc;

pub use classifier::{ClassificationState, LineClassifier, LineKind};
pub use sloc::{LineStats, SlocCounter};

#[cfg(test)]
mod test_fixtures;
