use chrono::NaiveDate;
use std::path::PathBuf;

use super::{
    format_utils::format_entry_link,
    journal_paths::{entry_file_name, entry_folder_name},
};

/// A day's note found on disk. Recomputed on every scan, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    /// `YYYY-MM-DD`, unique per entry.
    pub folder_name: String,
    /// `<Weekday>.md`, only unique within its folder.
    pub file_name: String,
    /// The line recording this entry in the home file.
    pub link: String,
}

impl JournalEntry {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date,
            folder_name: entry_folder_name(date),
            file_name: entry_file_name(date),
            link: format_entry_link(date),
        }
    }
}

/// A reference to a newly created entry file.
#[derive(Debug)]
pub struct EntryRef {
    pub date: NaiveDate,
    pub path: PathBuf,
}
