//! College detail overlay

use crate::action::Action;
use crate::component::Component;
use crate::components::{centered_popup, table::truncate};
use crate::model::CollegeRecord;
use crate::services::format_optional_inr;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shows every attribute of one college
#[derive(Default)]
pub struct DetailDialog;

impl DetailDialog {
    pub fn draw_college(&self, frame: &mut Frame, area: Rect, college: &CollegeRecord, compared: bool) {
        let popup = centered_popup(area, 64, 16);
        frame.render_widget(Clear, popup);

        let title = format!(" {} ", truncate(&college.name, popup.width.saturating_sub(4) as usize));
        let paragraph = Paragraph::new(detail_lines(college, compared))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, popup);
    }
}

impl Component for DetailDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char(' ') => Some(Action::ToggleCompare),
            _ => None,
        };
        Ok(action)
    }

    /// Needs a record; the app calls `draw_college` instead
    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        Ok(())
    }
}

fn detail_lines(college: &CollegeRecord, compared: bool) -> Vec<Line<'static>> {
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!(" {:<18}", label), Style::default().fg(Color::Yellow)),
            Span::raw(value),
        ])
    };
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        Line::from(""),
        field("Id", college.id.to_string()),
        field("QS India rank", or_dash(college.qs_rank.map(|r| r.to_string()))),
        field("Course fees", format_optional_inr(college.course_fees)),
        field("Average placement", format_optional_inr(college.placement_average())),
        field("Highest placement", format_optional_inr(college.placement_highest())),
        field("User review", or_dash(college.user_review.map(|r| format!("{} / 10", r)))),
        field(
            "Overall ranking",
            or_dash(college.ranking_overall().map(|r| format!("#{} in India", r))),
        ),
        field("Ranking year", or_dash(college.ranking_year().map(|y| y.to_string()))),
        field("JEE Adv. cutoff", or_dash(college.jee_advanced_cutoff.clone())),
    ];
    if college.featured {
        lines.push(field("Featured", "yes".to_string()));
    }
    let compare = if compared { "added" } else { "-" };
    lines.push(field("Compare", compare.to_string()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Space toggles compare · Esc closes",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
