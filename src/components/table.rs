//! College table - sortable headers, multi-line rows, load-more detection
//!
//! The table never owns records. It renders whatever the list view has
//! materialized and reports when its last row is on screen so the app can
//! request the next page.

use crate::model::{CollegeId, CollegeRecord, ListView, SortConfig, SortKey};
use crate::services::{format_optional_inr, ranking_ratio, ratio_bar};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState},
    Frame,
};
use std::collections::HashSet;
use unicode_width::UnicodeWidthStr;

/// Lines per college row
const ROW_HEIGHT: u16 = 3;

/// Header label and the field each column sorts by
pub const COLUMNS: [(&str, SortKey); 6] = [
    ("QS INDIA", SortKey::QsRank),
    ("COLLEGES", SortKey::Name),
    ("COURSE FEES", SortKey::CourseFees),
    ("PLACEMENT", SortKey::PlacementAverage),
    ("USER REVIEWS", SortKey::UserReview),
    ("RANKING", SortKey::RankingOverall),
];

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(2),
    Constraint::Length(10),
    Constraint::Min(30),
    Constraint::Length(14),
    Constraint::Length(24),
    Constraint::Length(14),
    Constraint::Length(16),
];

/// Width of the ranking bar in cells
const BAR_WIDTH: usize = 12;

/// Selection and viewport state for the college table
#[derive(Default)]
pub struct CollegeTable {
    state: TableState,
    /// Whole rows that fit in the last rendered viewport
    visible_rows: usize,
    /// Row count at the last render
    rendered_len: usize,
}

impl CollegeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Select the first row, or nothing when the table is empty
    pub fn reset(&mut self, len: usize) {
        self.state = TableState::default();
        if len > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn select_row(&mut self, row: usize) {
        self.state.select(Some(row));
    }

    /// Keep the selection inside `len` rows
    pub fn clamp(&mut self, len: usize) {
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            None => self.state.select(Some(0)),
            _ => {}
        }
    }

    /// Move down one row. Returns `true` when already on the last row,
    /// i.e. the user is pushing past the bottom edge.
    pub fn next(&mut self, len: usize) -> bool {
        if len == 0 {
            return true;
        }
        match self.state.selected() {
            Some(i) if i + 1 >= len => true,
            Some(i) => {
                self.state.select(Some(i + 1));
                false
            }
            None => {
                self.state.select(Some(0));
                false
            }
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    /// Move down by a viewport. Returns `true` if the move hit the bottom.
    pub fn page_down(&mut self, len: usize) -> bool {
        if len == 0 {
            return true;
        }
        let step = self.visible_rows.max(1);
        let current = self.state.selected().unwrap_or(0);
        let target = (current + step).min(len - 1);
        self.state.select(Some(target));
        target == len - 1
    }

    pub fn page_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let step = self.visible_rows.max(1);
        let current = self.state.selected().unwrap_or(0);
        self.state.select(Some(current.saturating_sub(step)));
    }

    /// Whether the last rendered row was inside the viewport
    pub fn last_row_visible(&self) -> bool {
        self.rendered_len > 0 && self.state.offset() + self.visible_rows >= self.rendered_len
    }

    /// Render the table for the list view's materialized rows
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        view: &ListView,
        compared: &HashSet<CollegeId>,
        year: i32,
    ) {
        let rows: Vec<Row> = view
            .displayed()
            .map(|college| build_row(college, compared.contains(&college.id), year))
            .collect();
        let len = rows.len();

        let title = format!(
            " Colleges ({} of {}) ",
            view.displayed_len(),
            view.match_count()
        );

        let table = Table::new(rows, WIDTHS)
            .header(build_header(view.sort_indicator()))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .column_spacing(1);

        frame.render_stateful_widget(table, area, &mut self.state);

        // borders (2) + header (1) + header margin (1)
        let body_height = area.height.saturating_sub(4);
        self.visible_rows = (body_height / ROW_HEIGHT) as usize;
        self.rendered_len = len;

        if len > self.visible_rows {
            let mut scrollbar_state = ScrollbarState::new(len.saturating_sub(self.visible_rows))
                .position(self.state.offset());
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

/// Header row; the active sort column carries a direction arrow
pub fn build_header(sort: SortConfig) -> Row<'static> {
    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut cells = vec![Cell::from("")];
    for (label, key) in COLUMNS {
        let text = match sort.key {
            Some(active) if active == key => format!("{} {}", label, sort.direction.indicator()),
            _ => label.to_string(),
        };
        cells.push(Cell::from(text).style(header_style));
    }

    Row::new(cells)
        .style(Style::default().bg(Color::Blue).fg(Color::White))
        .bottom_margin(1)
}

/// Three-line row for one college
pub fn build_row(college: &CollegeRecord, compared: bool, year: i32) -> Row<'static> {
    let dim = Style::default().fg(Color::Gray);

    let marker = if compared { "◆" } else { " " };

    let qs_rank = college
        .qs_rank
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut name_lines = vec![Line::from(Span::styled(
        college.name.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    if let Some(cutoff) = &college.jee_advanced_cutoff {
        name_lines.push(Line::from(Span::styled(
            format!("JEE Advanced {} Cutoff: {}", year, cutoff),
            dim,
        )));
    }

    let placement = Text::from(vec![
        Line::from(format!(
            "Average: {}",
            format_optional_inr(college.placement_average())
        )),
        Line::from(Span::styled(
            format!("Highest: {}", format_optional_inr(college.placement_highest())),
            dim,
        )),
    ]);

    let review = college
        .user_review
        .map(|r| format!("{} / 10", r))
        .unwrap_or_else(|| "-".to_string());

    let ranking = match college.ranking_overall() {
        Some(overall) => {
            let year_line = college
                .ranking_year()
                .map(|y| y.to_string())
                .unwrap_or_default();
            Text::from(vec![
                Line::from(format!("#{} in India", overall)),
                Line::from(Span::styled(year_line, dim)),
                Line::from(Span::styled(
                    ratio_bar(ranking_ratio(overall), BAR_WIDTH),
                    Style::default().fg(Color::LightRed),
                )),
            ])
        }
        None => Text::from("-"),
    };

    let row_style = if college.featured {
        Style::default().bg(Color::Rgb(60, 55, 20))
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(Span::styled(marker, Style::default().fg(Color::Yellow))),
        Cell::from(qs_rank),
        Cell::from(Text::from(name_lines)),
        Cell::from(format_optional_inr(college.course_fees)),
        Cell::from(placement),
        Cell::from(review),
        Cell::from(ranking),
    ])
    .height(ROW_HEIGHT)
    .style(row_style)
}

/// Truncate `text` to `width` display cells, ending in an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::college::CollegeId;
    use crate::model::sort::SortDirection;
    use crate::model::SortPolicy;
    use ratatui::{backend::TestBackend, Terminal};

    fn college(id: u64, name: &str) -> CollegeRecord {
        CollegeRecord {
            id: CollegeId::Number(id),
            name: name.to_string(),
            qs_rank: Some(id as u32),
            course_fees: Some(200000.0),
            user_review: Some(8.0),
            placement: None,
            ranking: None,
            featured: false,
            logo: None,
            jee_advanced_cutoff: None,
        }
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_header_marks_active_column() {
        let sort = SortConfig {
            key: Some(SortKey::CourseFees),
            direction: SortDirection::Descending,
        };
        let backend = TestBackend::new(140, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let view = ListView::new(vec![college(1, "Alpha")], 10, SortPolicy::Page).unwrap();
        let mut table = CollegeTable::new();

        terminal
            .draw(|frame| {
                let table_widget = Table::new(Vec::<Row>::new(), WIDTHS).header(build_header(sort));
                frame.render_widget(table_widget, frame.area());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("COURSE FEES ▼"));

        terminal
            .draw(|frame| table.render(frame, frame.area(), &view, &HashSet::new(), 2024))
            .unwrap();
        assert!(!buffer_text(&terminal).contains("▲"));
    }

    #[test]
    fn test_render_shows_rows_and_detects_last_row() {
        let records: Vec<CollegeRecord> = (1..=3).map(|i| college(i, &format!("College {}", i))).collect();
        let view = ListView::new(records, 10, SortPolicy::Page).unwrap();
        let mut table = CollegeTable::new();
        table.reset(view.displayed_len());

        // 4 chrome lines + 3 rows of 3 lines
        let mut terminal = Terminal::new(TestBackend::new(140, 13)).unwrap();
        terminal
            .draw(|frame| table.render(frame, frame.area(), &view, &HashSet::new(), 2024))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("College 1"));
        assert!(text.contains("College 3"));
        assert!(text.contains("₹2,00,000"));
        assert!(table.last_row_visible());
    }

    #[test]
    fn test_last_row_hidden_in_short_viewport() {
        let records: Vec<CollegeRecord> = (1..=10).map(|i| college(i, &format!("C{}", i))).collect();
        let view = ListView::new(records, 10, SortPolicy::Page).unwrap();
        let mut table = CollegeTable::new();
        table.reset(view.displayed_len());

        let mut terminal = Terminal::new(TestBackend::new(140, 13)).unwrap();
        terminal
            .draw(|frame| table.render(frame, frame.area(), &view, &HashSet::new(), 2024))
            .unwrap();

        assert!(!table.last_row_visible());
    }

    #[test]
    fn test_empty_table_never_requests_more() {
        let table = CollegeTable::new();
        assert!(!table.last_row_visible());
    }

    #[test]
    fn test_navigation_reports_bottom_edge() {
        let mut table = CollegeTable::new();
        table.reset(3);
        assert!(!table.next(3));
        assert!(!table.next(3));
        assert_eq!(table.selected(), Some(2));
        assert!(table.next(3));

        table.previous(3);
        assert_eq!(table.selected(), Some(1));
        table.first(3);
        assert_eq!(table.selected(), Some(0));
        table.last(3);
        assert_eq!(table.selected(), Some(2));

        table.clamp(1);
        assert_eq!(table.selected(), Some(0));
        table.clamp(0);
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_compare_marker_and_cutoff() {
        let mut rec = college(1, "IIT Test");
        rec.jee_advanced_cutoff = Some("321".to_string());
        let view = ListView::new(vec![rec], 10, SortPolicy::Page).unwrap();
        let mut table = CollegeTable::new();
        let compared: HashSet<CollegeId> = [CollegeId::Number(1)].into_iter().collect();

        let mut terminal = Terminal::new(TestBackend::new(140, 10)).unwrap();
        terminal
            .draw(|frame| table.render(frame, frame.area(), &view, &compared, 2025))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("◆"));
        assert!(text.contains("JEE Advanced 2025 Cutoff: 321"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Indian Institute of Technology", 10), "Indian In…");
    }
}
