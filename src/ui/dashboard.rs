//! Dashboard rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::layout::centered_rect;
use crate::app::App;
use crate::state::{
    relative_time, DashboardState, ProfileMenuItem, QuickAction, StatCard, UserProfile,
};
use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Colors for the current theme
struct Theme {
    background: Color,
    text: Color,
    muted: Color,
    accent: Color,
}

impl Theme {
    fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::LightBlue,
            }
        } else {
            Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Blue,
            }
        }
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let dashboard = &app.state.dashboard;
    let theme = Theme::for_mode(dashboard.dark_mode);
    let user = app
        .session
        .current()
        .map(|s| &s.user)
        .unwrap_or(&dashboard.data.user);

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(3),             // Welcome
            Constraint::Length(5),             // Stats
            Constraint::Min(8),                // Traffic + trips
            Constraint::Length(BUTTON_HEIGHT), // Quick actions
            Constraint::Length(1),             // Selected action description
        ])
        .split(area);

    draw_header(frame, chunks[0], dashboard, user, &theme);
    draw_welcome(frame, chunks[1], user, &theme);
    draw_stats(frame, chunks[2], &dashboard.data.stats.cards(), &theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    draw_traffic(frame, middle[0], dashboard, &theme);
    draw_trips(frame, middle[1], dashboard, &theme);

    draw_quick_actions(frame, chunks[4], dashboard);
    frame.render_widget(
        Paragraph::new(dashboard.selected_action().description())
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center),
        chunks[5],
    );

    if dashboard.menu_open {
        draw_profile_menu(frame, area, dashboard, user);
    }
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    dashboard: &DashboardState,
    user: &UserProfile,
    theme: &Theme,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let brand = Line::from(Span::styled(
        " 🚗 NeuroFlux AI",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(brand), halves[0]);

    let theme_icon = if dashboard.dark_mode { "☀" } else { "☾" };
    let right = Line::from(vec![
        Span::styled(format!("{theme_icon}  "), Style::default().fg(theme.muted)),
        Span::styled(
            format!("🔔 {}  ", dashboard.data.notifications),
            Style::default().fg(Color::Red),
        ),
        Span::styled(
            format!("[{}] ", user.initial()),
            Style::default()
                .fg(Color::Black)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", user.name), Style::default().fg(theme.text)),
    ]);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        halves[1],
    );
}

fn draw_welcome(frame: &mut Frame, area: Rect, user: &UserProfile, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}! 🚀", user.name),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Monitor your urban mobility network in real-time",
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area.inner(ratatui::layout::Margin::new(1, 0)));
}

fn draw_stats(frame: &mut Frame, area: Rect, cards: &[StatCard], theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let trend = if card.trending { "↗ " } else { "" };
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.title, Style::default().fg(theme.muted))),
            Line::from(Span::styled(
                format!("{trend}{}", card.subtitle),
                Style::default().fg(theme.accent),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted));
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn draw_traffic(frame: &mut Frame, area: Rect, dashboard: &DashboardState, theme: &Theme) {
    let block = Block::default()
        .title(" Real-time Traffic Analysis ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let data = &dashboard.data;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Current Traffic Status: ", Style::default().fg(theme.muted)),
            Span::styled(
                format!(" {} ", data.traffic_status),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ),
        ])),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent))
        .percent(data.traffic_density_pct.min(100));
    frame.render_widget(gauge, rows[1]);

    frame.render_widget(
        Paragraph::new(format!(
            "Traffic density: {}% of normal capacity",
            data.traffic_density_pct
        ))
        .style(Style::default().fg(theme.muted)),
        rows[2],
    );

    let map = Paragraph::new(vec![
        Line::from(""),
        Line::from("Interactive Traffic Map"),
        Line::from(Span::styled(
            "Real-time vehicle tracking and route optimization",
            Style::default().fg(theme.muted),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(map, rows[3]);
}

fn draw_trips(frame: &mut Frame, area: Rect, dashboard: &DashboardState, theme: &Theme) {
    let now = Utc::now();
    let items: Vec<ListItem> = dashboard
        .data
        .recent_trips
        .iter()
        .map(|trip| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    trip.destination.clone(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(
                        format!(
                            "{} • {:.1} km ",
                            relative_time(trip.completed_at, now),
                            trip.distance_km
                        ),
                        Style::default().fg(theme.muted),
                    ),
                    Span::styled(trip.status.label(), Style::default().fg(Color::Green)),
                ]),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Recent Trips ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );
    frame.render_widget(list, area);
}

fn draw_quick_actions(frame: &mut Frame, area: Rect, dashboard: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, QuickAction::ALL.len() as u32);
            QuickAction::ALL.len()
        ])
        .split(area);

    let selected = dashboard.selected_action();
    for (action, column) in QuickAction::ALL.iter().zip(columns.iter()) {
        render_button(frame, *column, action.title(), *action == selected);
    }
}

fn draw_profile_menu(frame: &mut Frame, area: Rect, dashboard: &DashboardState, user: &UserProfile) {
    let height = ProfileMenuItem::ALL.len() as u16 + 4;
    let menu_area = centered_rect(area, 34, height);
    frame.render_widget(Clear, menu_area);

    let mut items = vec![
        ListItem::new(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        ListItem::new(""),
    ];
    items.extend(ProfileMenuItem::ALL.iter().map(|item| {
        let style = if *item == dashboard.selected_menu_item() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        ListItem::new(Span::styled(format!(" {} ", item.label()), style))
    }));

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ", user.name))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, menu_area);
}
