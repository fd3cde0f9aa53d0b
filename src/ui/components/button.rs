//! Bordered buttons

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Rows taken by a button: label plus two borders
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonState {
    Idle,
    Focused,
    Disabled,
}

impl ButtonState {
    fn styles(self) -> (Style, Style) {
        match self {
            Self::Focused => (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Self::Disabled => (
                Style::default().fg(Color::DarkGray),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Self::Idle => (Style::default().fg(Color::DarkGray), Style::default()),
        }
    }
}

fn draw(frame: &mut Frame, area: Rect, label: &str, state: ButtonState, border: BorderType) {
    let (border_style, label_style) = state.styles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border)
        .border_style(border_style);
    let button = Paragraph::new(format!(" {label} "))
        .style(label_style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

/// Plain button; `is_selected` highlights it
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    let state = if is_selected {
        ButtonState::Focused
    } else {
        ButtonState::Idle
    };
    draw(frame, area, label, state, BorderType::Rounded);
}

/// Form submit button. Shows `busy_label` and is disabled while `busy`.
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    busy_label: &str,
    busy: bool,
) {
    if busy {
        draw(frame, area, busy_label, ButtonState::Disabled, BorderType::Thick);
    } else {
        draw(frame, area, label, ButtonState::Focused, BorderType::Thick);
    }
}

/// Button whose label carries its keyboard shortcut
pub fn render_shortcut_button(frame: &mut Frame, area: Rect, key: &str, label: &str) {
    draw(
        frame,
        area,
        &format!("{label} ({key})"),
        ButtonState::Idle,
        BorderType::Rounded,
    );
}
