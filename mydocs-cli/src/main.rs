mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::{create_mode, publish_mode, version_mode};
use mydocs_core::{Config, Journal};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::new();
    logging::init_logging(cli.verbose);
    let renderer = Renderer::new(RenderOptions {
        use_color: cli.color.enabled(),
    });

    match run(&cli, &renderer) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            renderer.print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, renderer: &Renderer) -> Result<()> {
    match &cli.command {
        Command::Create { date } => {
            let journal = open_journal(cli)?;
            create_mode(date.as_deref(), renderer, &journal)
        }
        Command::Publish => {
            let journal = open_journal(cli)?;
            publish_mode(renderer, &journal)
        }
        Command::Version => {
            version_mode(renderer);
            Ok(())
        }
    }
}

fn open_journal(cli: &Cli) -> Result<Journal> {
    match &cli.dir {
        Some(dir) => Ok(Journal::with_config(
            Config::load()?.with_journal_dir(dir.clone()),
        )),
        None => Journal::new(),
    }
}
