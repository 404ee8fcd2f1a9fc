use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::{ColorConfig, Config, KeybindingConfig};
use crate::domain::Verse;
use crate::tui::app::{ActiveView, TuiApp};

pub fn render(frame: &mut Frame, app: &TuiApp, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Featured banner
            Constraint::Length(1), // View tabs
            Constraint::Min(5),    // Active view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_featured(frame, app, chunks[0], &config.colors);
    render_tabs(frame, app, chunks[1], &config.colors);
    match app.active_view {
        ActiveView::Read => render_read_view(frame, app, chunks[2], &config.colors),
        ActiveView::Search => render_search_view(frame, app, chunks[2], &config.colors),
        ActiveView::Favorites => render_favorites_view(frame, app, chunks[2], &config.colors),
    }
    render_status_bar(frame, app, chunks[3], config);
}

fn render_featured(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let featured = app.featured;
    let style = Style::default().fg(colors.featured_fg).bg(colors.featured_bg);

    let text = Line::from(Span::styled(
        format!("\u{201c}{}\u{201d}", featured.text),
        Style::default().add_modifier(Modifier::ITALIC),
    ));

    let title = Line::from(vec![
        Span::raw(" Verse of the Moment: "),
        Span::styled(
            featured.reference,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" #{} ", featured.theme)),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(style)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let titles: Vec<String> = ActiveView::ALL
        .iter()
        .map(|view| match view {
            ActiveView::Favorites => format!("{} ({})", view.title(), app.favorites.len()),
            _ => view.title().to_string(),
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_view.index())
        .style(Style::default().fg(colors.inactive_border))
        .highlight_style(
            Style::default()
                .fg(colors.active_border)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn verse_item<'a>(verse: &'a Verse, is_favorite: bool, label: String, colors: &ColorConfig) -> ListItem<'a> {
    let marker = if is_favorite {
        Span::styled("\u{2665} ", Style::default().fg(colors.favorite_marker))
    } else {
        Span::raw("  ")
    };

    ListItem::new(Line::from(vec![
        marker,
        Span::styled(label, Style::default().fg(colors.verse_number)),
        Span::raw(verse.display_text()),
    ]))
}

fn highlight(colors: &ColorConfig) -> Style {
    Style::default()
        .bg(colors.selection_bg)
        .fg(colors.selection_fg)
        .add_modifier(Modifier::BOLD)
}

fn render_read_view(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let book = app.current_book();
    let title = format!(
        " {} {} [{}/{}] ",
        book.book_name, app.chapter_number, app.chapter_number, book.chapters
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border(true)));

    let chapter = match &app.chapter {
        Some(chapter) if !app.is_loading => chapter,
        _ => {
            let message = if app.is_loading {
                "Loading chapter..."
            } else {
                "Could not load this chapter. Press R to retry or pick another chapter."
            };
            frame.render_widget(Paragraph::new(message).block(block), area);
            return;
        }
    };

    let items: Vec<ListItem> = chapter
        .verses
        .iter()
        .map(|verse| {
            verse_item(
                verse,
                app.is_favorite(verse),
                format!("{:>3} ", verse.verse),
                colors,
            )
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(colors));

    let mut state = ListState::default().with_selected(Some(app.verse_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_search_view(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let input = if app.is_editing {
        format!("{}\u{258f}", app.search_input)
    } else {
        app.search_input.clone()
    };
    let input_block = Block::default()
        .title(" Look up a passage (e.g. John 3:16, Psalms 23) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border(app.is_editing)));
    frame.render_widget(Paragraph::new(input).block(input_block), chunks[0]);

    let title = match &app.search_results {
        Some(results) if !results.reference.is_empty() => format!(" {} ", results.reference),
        _ => " Results ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border(!app.is_editing)));

    if app.is_searching {
        frame.render_widget(Paragraph::new("Searching...").block(block), chunks[1]);
        return;
    }

    let verses = app.search_verses();
    if verses.is_empty() {
        let hint = "Type / to search by book, chapter and verse.";
        frame.render_widget(
            Paragraph::new(hint).block(block).wrap(Wrap { trim: true }),
            chunks[1],
        );
        return;
    }

    let items: Vec<ListItem> = verses
        .iter()
        .map(|verse| verse_item(verse, app.is_favorite(verse), format!("{}  ", verse.reference()), colors))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(colors));

    let mut state = ListState::default().with_selected(Some(app.search_index));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_favorites_view(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let block = Block::default()
        .title(format!(" Favorites ({}) ", app.favorites.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border(true)));

    if app.favorites.is_empty() {
        let empty = Text::from(vec![
            Line::from(Span::styled(
                "No favorites yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Start reading and press f on verses you'd like to save for later."),
        ]);
        frame.render_widget(
            Paragraph::new(empty).block(block).wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .favorites
        .iter()
        .map(|fav| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        fav.reference.as_str(),
                        Style::default()
                            .fg(colors.favorite_marker)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  saved {}", fav.saved_at.format("%Y-%m-%d")),
                        Style::default().fg(colors.inactive_border),
                    ),
                ]),
                Line::from(format!("  {}", fav.text.trim())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight(colors));

    let mut state = ListState::default().with_selected(Some(app.favorite_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, config: &Config) {
    let status = match &app.status_message {
        Some(msg) => msg.clone(),
        None => key_hints(app, &config.keybindings),
    };

    let paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(config.colors.status_fg)
            .bg(config.colors.status_bg),
    );

    frame.render_widget(paragraph, area);
}

/// Help line for the active view, built from the configured bindings.
pub fn key_hints(app: &TuiApp, keys: &KeybindingConfig) -> String {
    let hint = KeybindingConfig::hint;

    if app.is_editing {
        return "Enter:Search  Esc:Cancel  Backspace:Delete".to_string();
    }

    let view = match app.active_view {
        ActiveView::Read => format!(
            "{}/{}:Chapter  {}/{}:Book  {}:Favorite  {}:Copy",
            hint(&keys.prev_chapter),
            hint(&keys.next_chapter),
            hint(&keys.prev_book),
            hint(&keys.next_book),
            hint(&keys.toggle_favorite),
            hint(&keys.copy),
        ),
        ActiveView::Search => format!(
            "{}:Search  {}:Favorite  {}:Copy",
            hint(&keys.search),
            hint(&keys.toggle_favorite),
            hint(&keys.copy)
        ),
        ActiveView::Favorites => format!(
            "{}:Open  {}:Remove  {}:Copy",
            hint(&keys.select),
            hint(&keys.toggle_favorite),
            hint(&keys.copy)
        ),
    };

    format!(
        "{}/{}:Nav  {}  {}:View  {}:Quit",
        hint(&keys.move_down),
        hint(&keys.move_up),
        view,
        hint(&keys.next_view),
        hint(&keys.quit)
    )
}
