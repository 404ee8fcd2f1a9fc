//! # openbible
//!
//! A terminal Bible reader: browse chapters, look up passages and keep a list
//! of favorite verses.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → BibleClient ─┐
//!                                     ├→ TUI / CLI
//! Store → Favorites ──────────────────┘
//! ```
//!
//! - [`fetcher`]: HTTP GET against the scripture API
//! - [`normalizer`]: JSON decoding into [`Chapter`](domain::Chapter)s
//! - [`api`]: chapter fetch and passage lookup, failures folded into `None`
//! - [`favorites`]: saved verses kept in a single key/value slot
//! - [`tui`]: terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print John 3
//! openbible read john 3
//!
//! # Look up a passage
//! openbible search John 3:16-18
//!
//! # Save a verse
//! openbible favorite add romans 8 28
//!
//! # Launch the TUI (also the default with no command)
//! openbible tui
//! ```

/// Scripture API client.
///
/// [`BibleClient`](api::BibleClient) builds request URLs and absorbs every
/// failure into `None` after logging it.
pub mod api;

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the store,
/// favorites, API client and configuration.
pub mod app;

/// The 66-book catalog and chapter navigation.
pub mod catalog;

/// Command-line interface using clap.
///
/// - `read <book_id> [chapter]` - Print a chapter
/// - `search <query...>` - Look up a passage
/// - `featured` - Show the current featured verse
/// - `books` - List the catalog
/// - `favorites` - List saved verses
/// - `favorite add|remove` - Edit saved verses
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/openbible/config.toml`, supporting:
/// - API base URL, translation and timeout
/// - Starting book and chapter
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Verse`](domain::Verse) and [`Chapter`](domain::Chapter): API content
/// - [`FavoriteVerse`](domain::FavoriteVerse): a saved verse with its timestamp
/// - [`BibleBook`](domain::BibleBook): catalog entry
/// - [`FeaturedVerse`](domain::FeaturedVerse): rotating banner entry
pub mod domain;

/// Saved verses, unique by reference and newest first.
pub mod favorites;

/// Featured verse rotation in fixed three-hour windows.
pub mod featured;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait returning a response body
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// API response decoding.
pub mod normalizer;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): Trait defining a string key/value slot
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
pub mod store;

/// Terminal user interface.
///
/// Featured banner on top, then Read / Search / Favorites views cycled with
/// Tab, and a status bar.
///
/// Keybindings: j/k move, h/l change chapter, H/L change book, f toggles a
/// favorite, / searches, Enter opens, q quits.
pub mod tui;
