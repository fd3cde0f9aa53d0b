//! Field rendering utilities for forms

use crate::state::forms::{FieldKind, FormField};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of a bordered single-line field
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    if field.kind == FieldKind::Consent {
        draw_checkbox(frame, area, field, is_active);
        return;
    }

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);

    if field.kind == FieldKind::Password {
        let eye = if field.revealed { " hide " } else { " show " };
        block = block.title_bottom(Line::from(eye).alignment(Alignment::Right));
    }

    frame.render_widget(content.block(block), area);
}

fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(field.display_value(), style),
        Span::raw(" "),
        Span::styled(&field.label, Style::default().fg(Color::Gray)),
    ]);

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Inline error alert shown above the fields
pub fn draw_alert(frame: &mut Frame, area: Rect, message: &str) {
    let alert = Paragraph::new(Line::from(vec![
        Span::styled(" ! ", Style::default().fg(Color::Black).bg(Color::Red)),
        Span::raw(" "),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]))
    .wrap(Wrap { trim: true });
    frame.render_widget(alert, area);
}

/// Dimmed key hints
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
