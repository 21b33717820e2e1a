//! Search input - edits the name filter

use crate::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search by college name";

/// Map a key pressed while searching to an Action
pub fn handle_search_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(Action::ExitSearchMode),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearSearch)
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ForceQuit)
        }
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

/// Render the search box; places the cursor while editing
pub fn draw_search_bar(frame: &mut Frame, area: Rect, query: &str, active: bool) {
    let border = if active { Color::Cyan } else { Color::DarkGray };

    let line = if query.is_empty() && !active {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(query.to_string()))
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (/) ")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);

    if active {
        let max_x = area.x + area.width.saturating_sub(2);
        let x = (area.x + 1 + query.width() as u16).min(max_x);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_search_keys() {
        assert_eq!(
            handle_search_key(key(KeyCode::Char('i'), KeyModifiers::NONE)),
            Some(Action::SearchInput('i'))
        );
        assert_eq!(
            handle_search_key(key(KeyCode::Char('I'), KeyModifiers::SHIFT)),
            Some(Action::SearchInput('I'))
        );
        assert_eq!(
            handle_search_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Action::SearchBackspace)
        );
        assert_eq!(
            handle_search_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Action::ClearSearch)
        );
        assert_eq!(
            handle_search_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Action::ExitSearchMode)
        );
        assert_eq!(handle_search_key(key(KeyCode::Tab, KeyModifiers::NONE)), None);
    }
}
