use chrono::NaiveDate;

use super::{
    date_utils::weekday_name,
    journal_paths::{entry_file_name, entry_folder_name},
};

/// Returns the first line of a new entry file: `# Thursday, December 25, 2025`
pub fn format_entry_title(date: NaiveDate) -> String {
    format!("# {}\n", date.format("%A, %B %-d, %Y"))
}

/// Renders the line that records an entry in the home file:
/// `- [2025-12-25/Thursday](2025-12-25/Thursday.md)`
///
/// The link target always uses `/`, whatever the host separator is.
pub fn format_entry_link(date: NaiveDate) -> String {
    let folder = entry_folder_name(date);
    format!(
        "- [{folder}/{}]({folder}/{})",
        weekday_name(date),
        entry_file_name(date)
    )
}
