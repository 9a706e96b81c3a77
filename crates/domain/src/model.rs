pub mod entry;
pub mod table;

pub use entry::LetterStatEntry;
pub use table::LetterStatsTable;
