//! Layout helpers and the status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Login | View::Register => "Enter: submit | Tab: next field | Ctrl+C: quit",
        View::Dashboard => {
            "←→: select | Enter: open | p: profile | d: theme | L: logout | q: quit"
        }
    }
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Session indicator
    let session = if app.session.is_signed_in() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::DarkGray))
    };
    spans.push(session);

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 10);
        let rect = centered_rect(area, 60, 20);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status.y, 23);
        assert_eq!(status.height, 1);
    }
}
