//! Chapter-Hotkeys: named chapter markers on global hotkeys.
//!
//! Standalone host for `chapter-hotkeys-core`. Edits the chapter list in a
//! JSON save file and, in `run` mode, turns hotkey presses into lines of a
//! chapter log.

mod cli;
mod config;
mod error;
mod event_loop;
mod host;
mod session;
#[cfg(test)]
mod tests;

pub(crate) use {
    error::{AppError, Result as AppResult},
    session::Session,
};

use crate::{
    cli::{Cli, Command},
    config::Config,
    host::{GlobalHotkeyRegistry, PresetPrompt, StdinPrompt},
};

use std::rc::Rc;

use chapter_hotkeys_core::NamePrompt;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "chapter_hotkeys=info,chapter_hotkeys_core=info";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        error!(error = ?e, "Command failed");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> AppResult<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::List => {
            let session = open(&config, None)?;
            for (id, name, hotkeys) in session.list() {
                println!("{}\t{}\t{}", id, name, hotkeys.join(", "));
            }
        }
        Command::Add { name } => {
            let session = open(&config, Some(name))?;
            match session.add()? {
                Some(id) => println!("{}", id),
                None => info!("No chapter added"),
            }
        }
        Command::Remove { chapter } => {
            open(&config, None)?.remove(&chapter)?;
        }
        Command::Rename { chapter, name } => {
            if !open(&config, Some(name))?.rename(&chapter)? {
                info!("Chapter not renamed");
            }
        }
        Command::Bind { chapter, hotkeys } => {
            open(&config, None)?.bind(&chapter, &hotkeys)?;
        }
        Command::Unbind { chapter } => {
            open(&config, None)?.bind(&chapter, &[])?;
        }
        Command::Run => {
            let registry = GlobalHotkeyRegistry::online()?;
            let session = Session::open(&config, registry, stdin_prompt())?;
            event_loop::run(session)?;
        }
    }

    Ok(())
}

/// Offline session. `Some(name)` answers prompts with the given name, or
/// interactively when the name itself is absent.
fn open(config: &Config, name: Option<Option<String>>) -> AppResult<Session> {
    let prompt: Rc<dyn NamePrompt> = match name {
        Some(Some(name)) => Rc::new(PresetPrompt::new(Some(name))),
        Some(None) => stdin_prompt(),
        None => Rc::new(PresetPrompt::new(None)),
    };

    Session::open(config, GlobalHotkeyRegistry::offline(), prompt)
}

fn stdin_prompt() -> Rc<dyn NamePrompt> {
    Rc::new(StdinPrompt)
}
