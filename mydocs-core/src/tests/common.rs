use crate::Config;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(journal_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        journal_dir,
        home_file: PathBuf::from("home.md"),
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
    }
}
