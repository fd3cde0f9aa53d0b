//! "Or continue with" social sign-in row

use super::button::{render_shortcut_button, BUTTON_HEIGHT};
use crate::platform::{FACEBOOK_SHORTCUT, GOOGLE_SHORTCUT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Rows needed by [`render_social_buttons`]
pub const SOCIAL_HEIGHT: u16 = 1 + BUTTON_HEIGHT;

pub fn render_social_buttons(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let divider = Paragraph::new("── Or continue with ──")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(divider, rows[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_shortcut_button(frame, buttons[0], GOOGLE_SHORTCUT, "Google");
    render_shortcut_button(frame, buttons[1], FACEBOOK_SHORTCUT, "Facebook");
}
