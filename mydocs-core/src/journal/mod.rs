mod date_utils;
mod format_utils;
mod journal;
mod journal_entry;
mod journal_paths;
mod scan_entries;

pub use date_utils::{ENTRY_DATE_FORMAT, parse_entry_date, weekday_name};
pub use format_utils::{format_entry_link, format_entry_title};
pub use journal::Journal;
pub use journal_entry::{EntryRef, JournalEntry};
pub use journal_paths::{entry_dir, entry_file, entry_file_name, entry_folder_name};
pub use scan_entries::scan_journal_dir;
