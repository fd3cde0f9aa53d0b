//! Sign-in form rendering

use super::auth_layout::{draw_credential_form, FormChrome};
use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// Email, then password
const ROWS: &[&[usize]] = &[&[0], &[1]];

pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    draw_credential_form(
        frame,
        area,
        app,
        &FormChrome {
            title: View::Login.title(),
            subtitle: View::Login.subtitle(),
            submit_label: "Sign In",
            busy_label: "Signing in...",
            switch_prompt: "Don't have an account?",
            switch_link: "Sign up here",
            rows: ROWS,
        },
    );
}
