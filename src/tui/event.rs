use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::Duration;

use crate::app::Result;
use crate::domain::Chapter;
use crate::normalizer::ApiResponse;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
}

pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    pub fn next(&self) -> Result<AppEvent> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    return Ok(AppEvent::Key(key));
                }
            }
        }
        Ok(AppEvent::Tick)
    }
}

/// Results of background requests, tagged with the generation they were
/// issued under.
#[derive(Debug)]
pub enum AppMessage {
    ChapterLoaded {
        generation: u64,
        chapter: Option<Chapter>,
    },
    SearchCompleted {
        generation: u64,
        response: Option<ApiResponse>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NextChapter,
    PrevChapter,
    NextBook,
    PrevBook,
    NextView,
    PrevView,
    Select,
    ToggleFavorite,
    Copy,
    Search,
    Refresh,
    None,
}
