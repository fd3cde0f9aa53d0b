//! Centered card shared by the sign-in and sign-up forms

use super::field_renderer::{draw_alert, draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SWITCH_FORM_SHORTCUT};
use crate::state::forms::{FieldKind, Form};
use crate::ui::components::{
    render_social_buttons, render_submit_button, BUTTON_HEIGHT, SOCIAL_HEIGHT,
};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card width in columns
const CARD_WIDTH: u16 = 64;

/// Per-form text around the shared layout
pub struct FormChrome<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub submit_label: &'a str,
    pub busy_label: &'a str,
    pub switch_prompt: &'a str,
    pub switch_link: &'a str,
    /// Field indices per row; fields in one row share the width
    pub rows: &'a [&'a [usize]],
}

fn row_height(form: &dyn Form, row: &[usize]) -> u16 {
    let all_checkboxes = row.iter().all(|&i| {
        form.store()
            .get(i)
            .is_some_and(|f| f.kind == FieldKind::Consent)
    });
    if all_checkboxes {
        2
    } else {
        FIELD_HEIGHT
    }
}

pub fn draw_credential_form(frame: &mut Frame, area: Rect, app: &App, chrome: &FormChrome) {
    let Some(form) = app.state.form.as_form() else {
        return;
    };
    let error = form.store().error();
    let busy = app.state.is_submitting();

    let mut constraints = vec![
        Constraint::Length(2), // Subtitle + blank
        Constraint::Length(if error.is_some() { 2 } else { 0 }),
    ];
    constraints.extend(
        chrome
            .rows
            .iter()
            .map(|row| Constraint::Length(row_height(form, row))),
    );
    constraints.extend([
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(SOCIAL_HEIGHT),
        Constraint::Length(1), // Switch link
        Constraint::Length(2), // Help
    ]);

    // +2 for the card borders
    let height: u16 = constraints
        .iter()
        .map(|c| match c {
            Constraint::Length(n) => *n,
            _ => 0,
        })
        .sum::<u16>()
        + 2;
    let card = centered_rect(area, CARD_WIDTH, height);

    let block = Block::default()
        .title(Line::from(Span::styled(
            format!(" {} ", chrome.title),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(chrome.subtitle)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[0],
    );

    if let Some(message) = error {
        draw_alert(frame, chunks[1], message);
    }

    let active = form.active_field();
    for (row_index, row) in chrome.rows.iter().enumerate() {
        let row_area = chunks[2 + row_index];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .split(row_area);
        for (cell, &field_index) in cells.iter().zip(row.iter()) {
            if let Some(field) = form.store().get(field_index) {
                draw_field(frame, *cell, field, field_index == active);
            }
        }
    }

    let tail = 2 + chrome.rows.len();
    render_submit_button(
        frame,
        chunks[tail],
        chrome.submit_label,
        chrome.busy_label,
        busy,
    );
    render_social_buttons(frame, chunks[tail + 1]);

    let link = Line::from(vec![
        Span::styled(
            format!("{} ", chrome.switch_prompt),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!("{} ({SWITCH_FORM_SHORTCUT})", chrome.switch_link),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(link).alignment(Alignment::Center),
        chunks[tail + 2],
    );

    draw_help_text(
        frame,
        chunks[tail + 3],
        &format!(
            "Tab/↑↓ move • Enter submit • {REVEAL_SHORTCUT} show password • Space check • Esc back"
        ),
    );
}
