pub mod report;

pub use report::JournalReport;
