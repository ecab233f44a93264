mod report;
mod tally;

pub use report::{DirectoryRow, LanguageCount, LanguageRow, SlocReport, percentage};
pub use tally::{LanguageCounts, ROOT_DIRECTORY, SlocTally};
