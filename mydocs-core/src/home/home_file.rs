use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{JournalError, journal::JournalEntry};

/// Lines starting with this (after trimming) are links to recorded entries.
pub const LINK_MARKER: &str = "- [";

/// The home file as far as reconciliation cares: which links it already records.
///
/// Only ever appended to. Lines that are not links are never looked at again.
#[derive(Debug)]
pub struct HomeFile {
    path: PathBuf,
    links: HashSet<String>,
    /// Set when the file has content that does not end with a newline.
    needs_line_break: bool,
}

impl HomeFile {
    /// Reads the links already recorded at `path`.
    ///
    /// A missing file is the same as an empty one. Bytes that are not UTF-8 only ever
    /// show up in lines that aren't links, so they are replaced rather than rejected.
    pub fn load(path: &Path) -> Result<Self, JournalError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "home file does not exist yet");
                Vec::new()
            }
            Err(source) => {
                return Err(JournalError::ReadFailed {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let content = String::from_utf8_lossy(&bytes);

        Ok(Self {
            path: path.to_path_buf(),
            links: parse_existing_links(&content),
            needs_line_break: !content.is_empty() && !content.ends_with('\n'),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn links(&self) -> &HashSet<String> {
        &self.links
    }

    /// Exact text comparison: a link that differs only in spacing is a different link.
    pub fn contains(&self, link: &str) -> bool {
        self.links.contains(link)
    }

    /// Appends one link line per entry, in the given order, after all existing content.
    ///
    /// Lines written before a failure stay in the file.
    pub fn append(&mut self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        let write_failed = |source: io::Error| JournalError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_failed)?;

        if self.needs_line_break {
            writeln!(file).map_err(write_failed)?;
        }
        for entry in entries {
            writeln!(file, "{}", entry.link).map_err(write_failed)?;
        }

        self.needs_line_break = false;
        self.links.extend(entries.iter().map(|entry| entry.link.clone()));
        Ok(())
    }
}

/// Collects the trimmed lines that look like entry links.
pub fn parse_existing_links(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(LINK_MARKER))
        .map(str::to_string)
        .collect()
}
