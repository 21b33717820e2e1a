//! Home component - search box, college table, status and help bars
//!
//! Owns presentation state (search mode, table selection, compare set).
//! Record state lives in the list view, passed in for rendering.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, search_bar, CollegeTable};
use crate::model::{CollegeId, CollegeRecord, ListView, SortKey};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashSet;

pub struct HomeComponent {
    /// Whether keystrokes edit the search query
    pub search_mode: bool,

    pub table: CollegeTable,

    /// Colleges marked for comparison, by id
    pub compared: HashSet<CollegeId>,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            table: CollegeTable::new(),
            compared: HashSet::new(),
        }
    }

    pub fn selected_college<'a>(&self, view: &'a ListView) -> Option<&'a CollegeRecord> {
        self.table.selected().and_then(|row| view.get(row))
    }

    /// Add or remove the selected college from the compare set.
    /// Returns whether it is now in the set.
    pub fn toggle_compare(&mut self, view: &ListView) -> Option<bool> {
        let id = self.selected_college(view)?.id.clone();
        if self.compared.remove(&id) {
            Some(false)
        } else {
            self.compared.insert(id);
            Some(true)
        }
    }

    pub fn clear_compare(&mut self) {
        self.compared.clear();
    }

    /// Sort key bound to a number key
    fn sort_key_for(c: char) -> Option<SortKey> {
        match c {
            '1'..='6' => {
                let index = c as usize - '1' as usize;
                Some(crate::components::table::COLUMNS[index].1)
            }
            '7' => Some(SortKey::PlacementHighest),
            _ => None,
        }
    }
}

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.search_mode {
            return Ok(search_bar::handle_search_key(key));
        }

        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstItem),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastItem),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('m') => Some(Action::LoadMore),
            KeyCode::Char('p') => Some(Action::ToggleSortPolicy),
            KeyCode::Char(' ') => Some(Action::ToggleCompare),
            KeyCode::Char('c') => Some(Action::ClearCompare),
            KeyCode::Char('x') => Some(Action::ExportCsv),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char(c) => Self::sort_key_for(c).map(Action::SortBy),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::NextItem),
            MouseEventKind::ScrollUp => Some(Action::PrevItem),
            _ => None,
        };
        Ok(action)
    }

    /// Drawing needs the list view; see `draw_home_screen`
    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything outside the home component needed to draw it
pub struct HomeRenderContext<'a> {
    pub view: &'a ListView,
    pub status_message: Option<&'a str>,
    pub error: Option<&'a str>,
    /// Year shown in the JEE cutoff label
    pub year: i32,
}

pub fn draw_home_screen(frame: &mut Frame, area: Rect, home: &mut HomeComponent, ctx: &HomeRenderContext) {
    let has_status = ctx.status_message.is_some() || ctx.error.is_some();
    let layout = calculate_main_layout(area, has_status);

    search_bar::draw_search_bar(frame, layout.search, ctx.view.query(), home.search_mode);
    home.table
        .render(frame, layout.table, ctx.view, &home.compared, ctx.year);

    if let Some(status_area) = layout.status {
        render_status_bar(frame, status_area, ctx);
    }
    render_help_bar(frame, layout.help, home, ctx.view);
}

fn render_status_bar(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let line = match (ctx.error, ctx.status_message) {
        (Some(error), _) => Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::Red),
        )),
        (None, Some(message)) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        )),
        (None, None) => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent, view: &ListView) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    };

    let mut spans = if home.search_mode {
        vec![
            key(" Enter/Esc"),
            Span::raw(" done  "),
            key("Ctrl-U"),
            Span::raw(" clear  "),
        ]
    } else {
        vec![
            key(" /"),
            Span::raw(" search  "),
            key("1-7"),
            Span::raw(" sort  "),
            key("Enter"),
            Span::raw(" details  "),
            key("Space"),
            Span::raw(" compare  "),
            key("?"),
            Span::raw(" help  "),
            key("q"),
            Span::raw(" quit  "),
        ]
    };

    spans.push(Span::styled(
        format!(
            "│ {} sort · {} compared · {} of {} loaded",
            view.policy(),
            home.compared.len(),
            view.loaded_count(),
            view.match_count()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
