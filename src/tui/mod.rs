pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use arboard::Clipboard;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::app::{AppContext, Result};

use self::app::{ActiveView, ChapterRequest, SearchRequest, TuiApp};
use self::event::{Action, AppEvent, AppMessage, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let reader = &ctx.config.reader;
    let mut tui_app = TuiApp::new(&reader.default_book, reader.default_chapter, Utc::now());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel();
    // Kept for the whole session; some platforms drop the contents with it.
    let mut clipboard = Clipboard::new()
        .map_err(|e| tracing::warn!("Clipboard unavailable: {}", e))
        .ok();

    tui_app.reload_favorites(&ctx.favorites);
    let initial = tui_app.request_chapter();
    spawn_chapter(&ctx, &tx, initial);

    loop {
        drain_messages(&mut tui_app, &ctx, &mut rx);

        terminal.draw(|frame| layout::render(frame, &tui_app, &ctx.config))?;

        match event_handler.next()? {
            AppEvent::Key(key) => handle_key(&mut tui_app, &ctx, &tx, &mut clipboard, key),
            AppEvent::Tick => {
                if tui_app.refresh_featured(Utc::now()) {
                    tracing::debug!("Featured verse rotated to {}", tui_app.featured.reference);
                }
            }
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn drain_messages(
    tui_app: &mut TuiApp,
    ctx: &AppContext,
    rx: &mut UnboundedReceiver<AppMessage>,
) {
    while let Ok(message) = rx.try_recv() {
        match message {
            AppMessage::ChapterLoaded {
                generation,
                chapter,
            } => {
                tui_app.apply_chapter(generation, chapter, &ctx.favorites);
            }
            AppMessage::SearchCompleted {
                generation,
                response,
            } => {
                if tui_app.apply_search(generation, response) {
                    tui_app.active_view = ActiveView::Search;
                }
            }
        }
    }
}

fn handle_key(
    tui_app: &mut TuiApp,
    ctx: &AppContext,
    tx: &UnboundedSender<AppMessage>,
    clipboard: &mut Option<Clipboard>,
    key: KeyEvent,
) {
    if tui_app.is_editing {
        handle_search_input(tui_app, ctx, tx, key);
        return;
    }

    let action = ctx.config.keybindings.get_action(&key);
    if action != Action::None {
        tui_app.clear_status();
    }

    let chapter_request = match action {
        Action::Quit => {
            tui_app.should_quit = true;
            None
        }
        Action::MoveUp => {
            tui_app.move_up();
            None
        }
        Action::MoveDown => {
            tui_app.move_down();
            None
        }
        Action::NextChapter => tui_app.next_chapter(),
        Action::PrevChapter => tui_app.prev_chapter(),
        Action::NextBook => tui_app.next_book(),
        Action::PrevBook => tui_app.prev_book(),
        Action::NextView => {
            tui_app.active_view = tui_app.active_view.next();
            None
        }
        Action::PrevView => {
            tui_app.active_view = tui_app.active_view.prev();
            None
        }
        Action::Select => match tui_app.active_view {
            ActiveView::Favorites => tui_app.open_selected_favorite(),
            ActiveView::Search => tui_app.open_selected_search_verse(),
            ActiveView::Read => None,
        },
        Action::ToggleFavorite => {
            tui_app.toggle_selected_favorite(&ctx.favorites);
            None
        }
        Action::Copy => {
            tui_app.copy_selected(|text| match clipboard.as_mut() {
                Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
                None => Err("no clipboard".to_string()),
            });
            None
        }
        Action::Search => {
            tui_app.start_editing();
            None
        }
        Action::Refresh => match tui_app.active_view {
            ActiveView::Search => {
                if let Some(request) = tui_app.submit_search() {
                    spawn_search(ctx, tx, request);
                }
                None
            }
            _ => Some(tui_app.request_chapter()),
        },
        Action::None => None,
    };

    if let Some(request) = chapter_request {
        spawn_chapter(ctx, tx, request);
    }
}

fn handle_search_input(
    tui_app: &mut TuiApp,
    ctx: &AppContext,
    tx: &UnboundedSender<AppMessage>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            tui_app.should_quit = true;
        }
        KeyCode::Esc => tui_app.cancel_editing(),
        KeyCode::Enter => {
            if let Some(request) = tui_app.submit_search() {
                tui_app.set_status(format!("Searching for \"{}\"...", request.query));
                spawn_search(ctx, tx, request);
            }
        }
        KeyCode::Backspace => tui_app.pop_char(),
        KeyCode::Char(c) => tui_app.push_char(c),
        _ => {}
    }
}

fn spawn_chapter(ctx: &AppContext, tx: &UnboundedSender<AppMessage>, request: ChapterRequest) {
    let bible = ctx.bible.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let chapter = bible.fetch_chapter(request.book_id, request.chapter).await;
        let message = AppMessage::ChapterLoaded {
            generation: request.generation,
            chapter,
        };
        if tx.send(message).is_err() {
            tracing::debug!("UI closed before chapter arrived");
        }
    });
}

fn spawn_search(ctx: &AppContext, tx: &UnboundedSender<AppMessage>, request: SearchRequest) {
    let bible = ctx.bible.clone();
    let tx = tx.clone();

    tokio::spawn(async move {
        let response = bible.search_verses(&request.query).await;
        let message = AppMessage::SearchCompleted {
            generation: request.generation,
            response,
        };
        if tx.send(message).is_err() {
            tracing::debug!("UI closed before search results arrived");
        }
    });
}
