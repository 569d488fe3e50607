pub mod detail;
mod help;
pub mod list;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Screen regions of the list view.
#[derive(Debug, Clone, Copy)]
pub struct ListLayout {
    pub header: Rect,
    pub search: Rect,
    pub info: Rect,
    pub list: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the terminal into the list view regions.
pub fn list_layout(area: Rect) -> ListLayout {
    // header(3) + search(3) + info(1) + list(min) + footer(1) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
    ListLayout {
        header: chunks[0],
        search: chunks[1],
        info: chunks[2],
        list: chunks[3],
        footer: chunks[4],
        status: chunks[5],
    }
}

/// Top-level render dispatch.
pub fn render(app: &App, frame: &mut Frame) {
    list::render(app, frame);

    // Detail overlay sits on top of the list
    if let Some(pair) = app.selected() {
        detail::render(app, pair, frame);
    }

    if app.show_help {
        help::render(frame);
    }
}

/// Create a centered rectangle using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::app::App;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    /// Render `app` into an off-screen buffer.
    pub fn draw(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| super::render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Buffer contents as one string per row.
    pub fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (area.y..area.y + area.height)
            .map(|y| {
                (area.x..area.x + area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(buffer: &Buffer, needle: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(needle))
    }

    pub fn count(buffer: &Buffer, needle: &str) -> usize {
        rows(buffer).iter().map(|row| row.matches(needle).count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_layout_overhead_matches_app() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = list_layout(area);
        let overhead = area.height - layout.list.height + 2;
        assert_eq!(overhead, crate::app::LIST_OVERHEAD);
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(80, 80, area);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 10);
        assert_eq!(popup.y, 5);
    }
}
