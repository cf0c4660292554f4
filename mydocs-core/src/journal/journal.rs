//! The `Journal` struct: creating daily entries and publishing them to the home file.

use super::{
    date_utils::parse_entry_date,
    format_utils::format_entry_title,
    journal_entry::{EntryRef, JournalEntry},
    journal_paths::{entry_dir, entry_file},
    scan_entries::scan_journal_dir,
};
use crate::{
    Config, JournalError, Notifier,
    home::{HomeFile, find_new_entries},
};
use anyhow::Result;
use chrono::NaiveDate;
use std::{
    fs::{DirBuilder, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// The central struct for all journal operations.
///
/// Everything lives in `config.journal_dir`: one `YYYY-MM-DD/<Weekday>.md` per day,
/// plus the home file linking to them.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// Nothing is touched on disk until an operation runs.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Full path of the home file.
    pub fn home_path(&self) -> PathBuf {
        self.config.journal_dir.join(&self.config.home_file)
    }

    /// Creates the entry for `date`, a `YYYY-MM-DD` string.
    ///
    /// `None` or an empty string means the reference date (today, unless configured
    /// otherwise). Returns [`JournalError::InvalidDateFormat`] without touching the disk
    /// when the date can't be parsed.
    pub fn create_entry(
        &self,
        date: Option<&str>,
        notifier: &dyn Notifier,
    ) -> Result<EntryRef, JournalError> {
        let date = match date {
            None | Some("") => self.config.reference_date,
            Some(input) => {
                parse_entry_date(input).ok_or_else(|| JournalError::InvalidDateFormat {
                    input: input.to_string(),
                })?
            }
        };
        self.create_entry_on(date, notifier)
    }

    /// Creates `{journal_dir}/YYYY-MM-DD/<Weekday>.md` holding only the title line.
    ///
    /// Refuses to touch an existing entry. If the folder gets created but the file
    /// doesn't, the folder is left in place.
    pub fn create_entry_on(
        &self,
        date: NaiveDate,
        notifier: &dyn Notifier,
    ) -> Result<EntryRef, JournalError> {
        let path = entry_file(&self.config.journal_dir, date);
        if path.exists() {
            return Err(JournalError::AlreadyExists { path });
        }

        let dir = entry_dir(&self.config.journal_dir, date);
        create_entry_dir(&dir)
            .map_err(|source| JournalError::FolderCreateFailed { path: dir, source })?;

        // `create_new` so a file created since the check above is never truncated.
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                return Err(JournalError::AlreadyExists { path });
            }
            Err(source) => return Err(JournalError::FileCreateFailed { path, source }),
        };

        if let Err(source) = file.write_all(format_entry_title(date).as_bytes()) {
            return Err(JournalError::FileWriteFailed { path, source });
        }

        info!(path = %path.display(), "created journal entry");
        notifier.notify_success(&format!("Created journal entry: {}", path.display()));
        Ok(EntryRef { date, path })
    }

    /// Every valid entry in the journal directory, newest first.
    pub fn find_entries(&self) -> Result<Vec<JournalEntry>, JournalError> {
        scan_journal_dir(&self.config.journal_dir)
    }

    /// Appends a link for every entry the home file doesn't record yet.
    ///
    /// New links go after all existing content, newest first among themselves, so
    /// after several runs the file is an append log rather than one sorted list.
    /// Returns how many links were appended.
    pub fn publish_index(&self, notifier: &dyn Notifier) -> Result<usize, JournalError> {
        let entries = self.find_entries()?;
        if entries.is_empty() {
            notifier.notify_info("No journal entries found");
            return Ok(0);
        }

        let mut home = HomeFile::load(&self.home_path())?;
        let new_entries = find_new_entries(entries, &home);
        debug!(
            recorded = home.links().len(),
            new = new_entries.len(),
            "compared entries with home file"
        );
        if new_entries.is_empty() {
            notifier.notify_info(&format!(
                "{} is already up to date",
                self.config.home_file.display()
            ));
            return Ok(0);
        }

        home.append(&new_entries)?;
        info!(count = new_entries.len(), path = %home.path().display(), "published entries");
        notifier.notify_success(&format!(
            "Added {} new entries to {}",
            new_entries.len(),
            self.config.home_file.display()
        ));
        Ok(new_entries.len())
    }
}

fn create_entry_dir(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }
    builder.create(dir)
}
