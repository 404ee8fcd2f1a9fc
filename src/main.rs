use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use openbible::app::AppContext;
use openbible::cli::{commands, Cli, Commands, FavoriteAction};
use openbible::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with command output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("{}; using default configuration", e);
            Config::default()
        }),
    };

    let ctx = AppContext::new(cli.db, config)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Read { book_id, chapter } => {
            commands::read_chapter(&ctx, &book_id, chapter).await?;
        }
        Commands::Search { query } => {
            commands::search(&ctx, &query.join(" ")).await?;
        }
        Commands::Quote {
            book_id,
            chapter,
            verse,
        } => {
            commands::quote(&ctx, &book_id, chapter, verse).await?;
        }
        Commands::Featured => {
            commands::show_featured()?;
        }
        Commands::Books => {
            commands::list_books()?;
        }
        Commands::Favorites { share } => {
            commands::list_favorites(&ctx, share)?;
        }
        Commands::Favorite { action } => match action {
            FavoriteAction::Add {
                book_id,
                chapter,
                verse,
            } => {
                commands::add_favorite(&ctx, &book_id, chapter, verse).await?;
            }
            FavoriteAction::Remove { reference } => {
                commands::remove_favorite(&ctx, &reference.join(" "))?;
            }
        },
        Commands::Tui => {
            openbible::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
