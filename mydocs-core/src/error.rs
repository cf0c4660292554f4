use std::{io, path::PathBuf};
use thiserror::Error;

/// Everything that can stop a journal operation.
///
/// Each variant names the failed step and the path involved. I/O variants keep the
/// underlying error as their `source`, so printing the whole chain (e.g. `{:#}` through
/// anyhow) gives the user the cause as well.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("invalid date format '{input}'. Please use YYYY-MM-DD format")]
    InvalidDateFormat { input: String },

    #[error("file {} already exists. Aborting", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("failed to create folder {}", path.display())]
    FolderCreateFailed { path: PathBuf, source: io::Error },

    #[error("failed to create file {}", path.display())]
    FileCreateFailed { path: PathBuf, source: io::Error },

    #[error("failed to write to file {}", path.display())]
    FileWriteFailed { path: PathBuf, source: io::Error },

    #[error("failed to scan for journal entries in {}", path.display())]
    ScanFailed { path: PathBuf, source: io::Error },

    #[error("failed to read existing {}", path.display())]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("failed to write to {}", path.display())]
    WriteFailed { path: PathBuf, source: io::Error },
}
