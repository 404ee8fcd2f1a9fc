//! Keybinding configuration for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::tui::event::Action;

/// Key strings bound to each action.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingConfig {
    pub quit: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub next_chapter: Vec<String>,
    pub prev_chapter: Vec<String>,
    pub next_book: Vec<String>,
    pub prev_book: Vec<String>,
    pub next_view: Vec<String>,
    pub prev_view: Vec<String>,
    pub select: Vec<String>,
    pub toggle_favorite: Vec<String>,
    pub copy: Vec<String>,
    pub search: Vec<String>,
    pub refresh: Vec<String>,
}

fn keys(bindings: &[&str]) -> Vec<String> {
    bindings.iter().map(|b| b.to_string()).collect()
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self {
            quit: keys(&["q", "Ctrl+c"]),
            move_up: keys(&["k", "Up"]),
            move_down: keys(&["j", "Down"]),
            next_chapter: keys(&["l", "Right"]),
            prev_chapter: keys(&["h", "Left"]),
            next_book: keys(&["L", "PageDown"]),
            prev_book: keys(&["H", "PageUp"]),
            next_view: keys(&["Tab"]),
            prev_view: keys(&["BackTab", "Shift+Tab"]),
            select: keys(&["Enter"]),
            toggle_favorite: keys(&["f", "Space"]),
            copy: keys(&["y"]),
            search: keys(&["/"]),
            refresh: keys(&["R"]),
        }
    }
}

impl KeybindingConfig {
    /// Get the action for a key event. Earlier entries win on overlap.
    pub fn get_action(&self, key: &KeyEvent) -> Action {
        let table: [(&[String], Action); 14] = [
            (self.quit.as_slice(), Action::Quit),
            (self.move_up.as_slice(), Action::MoveUp),
            (self.move_down.as_slice(), Action::MoveDown),
            (self.next_chapter.as_slice(), Action::NextChapter),
            (self.prev_chapter.as_slice(), Action::PrevChapter),
            (self.next_book.as_slice(), Action::NextBook),
            (self.prev_book.as_slice(), Action::PrevBook),
            (self.next_view.as_slice(), Action::NextView),
            (self.prev_view.as_slice(), Action::PrevView),
            (self.select.as_slice(), Action::Select),
            (self.toggle_favorite.as_slice(), Action::ToggleFavorite),
            (self.copy.as_slice(), Action::Copy),
            (self.search.as_slice(), Action::Search),
            (self.refresh.as_slice(), Action::Refresh),
        ];

        table
            .iter()
            .find(|(bindings, _)| matches_any(key, bindings))
            .map(|(_, action)| *action)
            .unwrap_or(Action::None)
    }

    /// First binding of an action, for on-screen hints.
    pub fn hint(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }
}

fn matches_any(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings.iter().any(|binding| match parse_key_string(binding) {
        Ok(parsed) => parsed.matches(key),
        Err(e) => {
            tracing::warn!("Ignoring keybinding {:?}: {}", binding, e);
            false
        }
    })
}

/// A parsed key binding with code and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Shift is ignored when the binding doesn't ask for it, since
    /// terminals report `L` as `Shift+L`.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && (self.modifiers == key.modifiers
                || self.modifiers == (key.modifiers & !KeyModifiers::SHIFT))
    }
}

/// Parse strings like `"j"`, `"PageDown"`, `"Ctrl+c"` or `"Shift+Tab"`.
pub fn parse_key_string(s: &str) -> Result<KeyBinding, String> {
    let s = s.trim();
    let (modifier_parts, key_part) = match s.rsplit_once('+') {
        // A lone "+" is the plus key itself.
        Some((mods, key)) if !key.is_empty() => (Some(mods), key),
        _ => (None, s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.into_iter().flat_map(|m| m.split('+')) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    Ok(KeyBinding {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn parse_key_code(s: &str) -> Result<KeyCode, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = s.to_lowercase();
    if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        if (1..=12).contains(&n) {
            return Ok(KeyCode::F(n));
        }
    }

    match lower.as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "backspace" | "bs" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "esc" | "escape" => Ok(KeyCode::Esc),
        "space" => Ok(KeyCode::Char(' ')),
        _ => Err(format!("Unknown key: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_parse_single_char() {
        let binding = parse_key_string("/").unwrap();
        assert_eq!(binding.code, KeyCode::Char('/'));
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_string("Enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key_string("PageDown").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_string("F12").unwrap().code, KeyCode::F(12));
        assert!(parse_key_string("F13").is_err());
    }

    #[test]
    fn test_parse_modifiers() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert_eq!(binding.code, KeyCode::Char('c'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL);

        let binding = parse_key_string("Ctrl+Shift+a").unwrap();
        assert_eq!(
            binding.modifiers,
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        );

        assert!(parse_key_string("Hyper+x").is_err());
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key_string("+").unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_keybinding_matches() {
        let binding = parse_key_string("Ctrl+c").unwrap();
        assert!(binding.matches(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('c'))));

        let upper = parse_key_string("L").unwrap();
        assert!(upper.matches(&KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_default_actions() {
        let config = KeybindingConfig::default();

        assert_eq!(config.get_action(&key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(config.get_action(&key(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(config.get_action(&key(KeyCode::Right)), Action::NextChapter);
        assert_eq!(config.get_action(&key(KeyCode::Char('h'))), Action::PrevChapter);
        assert_eq!(config.get_action(&key(KeyCode::PageDown)), Action::NextBook);
        assert_eq!(config.get_action(&key(KeyCode::Tab)), Action::NextView);
        assert_eq!(config.get_action(&key(KeyCode::Char(' '))), Action::ToggleFavorite);
        assert_eq!(config.get_action(&key(KeyCode::Char('/'))), Action::Search);
        assert_eq!(config.get_action(&key(KeyCode::Char('y'))), Action::Copy);
        assert_eq!(config.get_action(&key(KeyCode::Char('z'))), Action::None);
    }

    #[test]
    fn test_custom_binding_from_toml() {
        let config: KeybindingConfig = toml::from_str(r#"toggle_favorite = ["b"]"#).unwrap();
        assert_eq!(config.get_action(&key(KeyCode::Char('b'))), Action::ToggleFavorite);
        assert_eq!(config.get_action(&key(KeyCode::Char('f'))), Action::None);
        assert_eq!(config.get_action(&key(KeyCode::Char('q'))), Action::Quit);
    }

    #[test]
    fn test_hint() {
        let config = KeybindingConfig::default();
        assert_eq!(KeybindingConfig::hint(&config.search), "/");
        assert_eq!(KeybindingConfig::hint(&[]), "?");
    }
}
