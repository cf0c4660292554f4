use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::date_utils::{ENTRY_DATE_FORMAT, weekday_name};

/// `2025-08-15`
pub fn entry_folder_name(date: NaiveDate) -> String {
    format!("{}", date.format(ENTRY_DATE_FORMAT))
}

/// `Friday.md`
pub fn entry_file_name(date: NaiveDate) -> String {
    format!("{}.md", weekday_name(date))
}

pub fn entry_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(entry_folder_name(date))
}

pub fn entry_file(root: &Path, date: NaiveDate) -> PathBuf {
    entry_dir(root, date).join(entry_file_name(date))
}
