pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "openbible")]
#[command(about = "Read, search and bookmark scripture from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the favorites database
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Path to the config file (default: ~/.config/openbible/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a chapter
    Read {
        /// Book id as listed by `books`, e.g. "john" or "1corinthians"
        book_id: String,
        /// Chapter number
        #[arg(default_value_t = 1)]
        chapter: u32,
    },
    /// Look up a passage by reference, e.g. "John 3:16-18"
    Search {
        /// Reference to look up
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print one verse as a quotable "text" — reference line
    Quote {
        book_id: String,
        chapter: u32,
        verse: u32,
    },
    /// Show the featured verse for the current three-hour window
    Featured,
    /// List every book with its chapter count
    Books,
    /// List saved verses, newest first
    Favorites {
        /// Print each verse as "text" with its reference
        #[arg(long)]
        share: bool,
    },
    /// Add or remove a saved verse
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Launch the TUI
    Tui,
}

#[derive(Subcommand)]
pub enum FavoriteAction {
    /// Save a verse
    Add {
        book_id: String,
        chapter: u32,
        verse: u32,
    },
    /// Remove a saved verse by reference, e.g. "John 3:16"
    Remove {
        #[arg(required = true, num_args = 1..)]
        reference: Vec<String>,
    },
}
