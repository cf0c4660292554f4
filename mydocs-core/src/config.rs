use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::debug;

const APP_DIR: &str = "mydocs";
const DEFAULT_HOME_FILE: &str = "home.md";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `YYYY-MM-DD` entry folders and the home file.
    /// Defaults to the current directory.
    pub journal_dir: PathBuf,
    /// Index file linking to every entry, relative to `journal_dir`. Default is `home.md`.
    pub home_file: PathBuf,
    /// The day used when an entry is created without a date.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    home_file: Option<PathBuf>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    /// Points the journal somewhere else, e.g. from a command line flag.
    pub fn with_journal_dir(mut self, journal_dir: PathBuf) -> Self {
        self.journal_dir = journal_dir;
        self
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        Self {
            journal_dir: file_config
                .journal_dir
                .unwrap_or_else(|| PathBuf::from(".")),
            home_file: file_config
                .home_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HOME_FILE)),
            reference_date: Local::now().date_naive(),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join(APP_DIR).join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join(APP_DIR).join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "loading config file");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("mydocs").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert!(c.contains(&b.config_dir().join("mydocs").join("config.toml")));
        }
    }

    #[test]
    fn parse_file_accepts_journal_dir_and_home_file() {
        let toml = r#"
            journal_dir = "/tmp/my-journal"
            home_file = "index.md"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.journal_dir.as_deref(), Some(Path::new("/tmp/my-journal")));
        assert_eq!(fc.home_file.as_deref(), Some(Path::new("index.md")));
    }

    #[test]
    fn parse_file_rejects_unknown_keys() {
        assert!(Config::parse_file("editor = \"hx\"").is_err());
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.journal_dir, PathBuf::from("."));
        assert_eq!(config.home_file, PathBuf::from("home.md"));
        assert_eq!(config.reference_date, Local::now().date_naive());
    }

    #[test]
    fn journal_dir_can_be_overridden() {
        let config = Config::from_file_config(FileConfig::default())
            .with_journal_dir(PathBuf::from("/notes"));
        assert_eq!(config.journal_dir, PathBuf::from("/notes"));
    }
}
