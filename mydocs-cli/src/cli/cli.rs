use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

/// mydocs — Simple Markdown journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Journal directory holding the dated folders and the home file.
    /// Defaults to `journal_dir` from the config file, then the current directory.
    #[arg(long, short, global = true, env = "MYDOCS_DIR")]
    pub dir: Option<PathBuf>,
    /// Log what is going on to stderr (`-v` debug, `-vv` trace). `RUST_LOG` wins when set.
    #[arg(long, short, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new journal entry (e.g., `mydocs create`, `mydocs create 2025-12-25`)
    #[command(visible_alias = "new")]
    Create {
        /// Date of the entry, YYYY-MM-DD. Defaults to today.
        date: Option<String>,
    },
    /// Append links to home.md for every entry it doesn't list yet
    Publish,
    /// Show version and author information
    Version,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_takes_optional_date() {
        let cli = Cli::try_parse_from(["mydocs", "create", "2025-12-25"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Create {
                date: Some("2025-12-25".to_string())
            }
        );

        let cli = Cli::try_parse_from(["mydocs", "new"]).unwrap();
        assert_eq!(cli.command, Command::Create { date: None });
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["mydocs", "publish", "--color", "never", "-vv", "--dir", "/j"])
                .unwrap();
        assert_eq!(cli.command, Command::Publish);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dir, Some(PathBuf::from("/j")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["mydocs"]).is_err());
    }
}
