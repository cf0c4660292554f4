use super::home_file::HomeFile;
use crate::journal::JournalEntry;

/// Keeps the entries whose link is not yet recorded in `home`, preserving their order.
pub fn find_new_entries(entries: Vec<JournalEntry>, home: &HomeFile) -> Vec<JournalEntry> {
    entries
        .into_iter()
        .filter(|entry| !home.contains(&entry.link))
        .collect()
}
