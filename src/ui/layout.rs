//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Friend list on the left with its button row underneath, the open form
/// on the right, and a one-line status bar at the bottom.
pub struct AppLayout {
    pub list_area: Rect,
    pub list_footer_area: Rect,
    pub form_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // panes
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let list_column = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(panes[0]);

        Self {
            list_area: list_column[0],
            list_footer_area: list_column[1],
            form_area: panes[1],
            status_area: rows[1],
        }
    }
}
