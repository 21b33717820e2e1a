//! Help dialog component
//!
//! Lists every keyboard shortcut.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let dialog_area = centered_popup(area, 60, content.len() as u16 + 2);
        frame.render_widget(Clear, dialog_area);

        let visible_height = dialog_area.height.saturating_sub(2) as usize;
        let max_scroll = content.len().saturating_sub(visible_height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let sections: [(&str, &[(&str, &str)]); 4] = [
        (
            "Navigation",
            &[
                ("j / ↓", "Next college (loads more at the bottom)"),
                ("k / ↑", "Previous college"),
                ("g / G", "First / last loaded college"),
                ("PgDn / PgUp", "Scroll one screen"),
                ("m", "Load the next page"),
            ],
        ),
        (
            "Search & Sort",
            &[
                ("/", "Search by name (Enter/Esc to finish)"),
                ("Ctrl-U", "Clear search while typing"),
                ("1-6", "Sort by column, again to reverse"),
                ("7", "Sort by highest placement"),
                ("p", "Switch page / global sorting"),
            ],
        ),
        (
            "Colleges",
            &[
                ("Enter", "Show details"),
                ("Space", "Add to / remove from compare"),
                ("c", "Clear compare set"),
                ("x", "Export loaded rows to CSV"),
            ],
        ),
        ("General", &[("?", "This help"), ("q", "Quit")]),
    ];

    let mut lines = Vec::new();
    for (title, bindings) in sections {
        lines.push(Line::from(Span::styled(
            format!(" {}", title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for (keys, description) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<12}", keys), Style::default().fg(Color::Cyan)),
                Span::raw(description.to_string()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_sort_keys() {
        let text: String = build_help_content()
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Sort by column"));
        assert!(text.contains("Export loaded rows to CSV"));
    }
}
