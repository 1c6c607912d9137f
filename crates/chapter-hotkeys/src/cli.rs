use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Named chapter markers on global hotkeys.
#[derive(Debug, Parser)]
#[command(name = "chapter-hotkeys", version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, env = "CHAPTER_HOTKEYS_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands. `CHAPTER` is a chapter id or display name.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List chapters with their hotkeys.
    List,
    /// Add a chapter; prompts for the name when omitted.
    Add {
        /// Chapter name.
        name: Option<String>,
    },
    /// Remove a chapter and its hotkeys.
    Remove {
        /// Chapter id or name.
        chapter: String,
    },
    /// Rename a chapter; prompts for the new name when omitted.
    Rename {
        /// Chapter id or name.
        chapter: String,
        /// New name.
        name: Option<String>,
    },
    /// Replace a chapter's hotkeys, e.g. `ctrl+shift+KeyM`.
    Bind {
        /// Chapter id or name.
        chapter: String,
        /// One or more hotkeys.
        #[arg(required = true)]
        hotkeys: Vec<String>,
    },
    /// Remove all hotkeys of a chapter.
    Unbind {
        /// Chapter id or name.
        chapter: String,
    },
    /// Listen for hotkeys and log chapter markers until interrupted.
    Run,
}
