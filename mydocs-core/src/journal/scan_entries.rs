use std::{ffi::OsStr, fs, io, path::Path};

use tracing::debug;

use super::{date_utils::parse_entry_date, journal_entry::JournalEntry, journal_paths::entry_file};
use crate::JournalError;

/// Lists the journal entries stored directly under `root`, newest first.
///
/// A child directory counts as an entry when its name is a real `YYYY-MM-DD` date and
/// it holds the `<Weekday>.md` file for that date. Everything else is skipped: those
/// folders are simply not journal entries.
pub fn scan_journal_dir(root: &Path) -> Result<Vec<JournalEntry>, JournalError> {
    let scan_failed = |source: io::Error| JournalError::ScanFailed {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(root).map_err(scan_failed)? {
        let dir_entry = dir_entry.map_err(scan_failed)?;
        // Symlinks are not followed, even when they point at a folder.
        if !dir_entry.file_type().map_err(scan_failed)?.is_dir() {
            continue;
        }
        let path = dir_entry.path();
        let Some(folder_name) = path.file_name().and_then(OsStr::to_str) else {
            debug!(path = %path.display(), "skipping folder with non UTF-8 name");
            continue;
        };
        match entry_from_folder(root, folder_name) {
            Some(entry) => entries.push(entry),
            None => debug!(folder = folder_name, "not a journal entry, skipping"),
        }
    }

    // Stable, so equal dates keep directory listing order.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    debug!(count = entries.len(), root = %root.display(), "scanned journal entries");
    Ok(entries)
}

fn entry_from_folder(root: &Path, folder_name: &str) -> Option<JournalEntry> {
    let date = parse_entry_date(folder_name)?;
    if !entry_file(root, date).is_file() {
        return None;
    }
    Some(JournalEntry::from_date(date))
}
