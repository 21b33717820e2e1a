//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen areas, top to bottom
pub struct MainLayout {
    pub search: Rect,
    pub table: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + area.width.saturating_sub(width) / 2;
    let popup_y = area.y + area.height.saturating_sub(height) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Search box, table, optional status line, help bar
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (status, help) = if has_status {
        (Some(chunks[2]), chunks[3])
    } else {
        (None, chunks[2])
    };

    MainLayout {
        search: chunks[0],
        table: chunks[1],
        status,
        help,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 40), true);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.table.height, 35);
        assert!(layout.status.is_some());
        assert_eq!(layout.help.y, 39);
    }

    #[test]
    fn test_layout_without_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 100, 40), false);
        assert_eq!(layout.table.height, 36);
        assert!(layout.status.is_none());
    }

    #[test]
    fn test_centered_popup_clamps() {
        let popup = centered_popup(Rect::new(0, 0, 20, 10), 40, 6);
        assert_eq!(popup, Rect::new(0, 2, 20, 6));
    }
}
