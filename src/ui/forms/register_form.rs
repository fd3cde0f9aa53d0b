//! Sign-up form rendering

use super::auth_layout::{draw_credential_form, FormChrome};
use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// First and last name share a row; the rest stack
const ROWS: &[&[usize]] = &[&[0, 1], &[2], &[3], &[4], &[5], &[6]];

pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    draw_credential_form(
        frame,
        area,
        app,
        &FormChrome {
            title: View::Register.title(),
            subtitle: View::Register.subtitle(),
            submit_label: "Create Account",
            busy_label: "Creating Account...",
            switch_prompt: "Already have an account?",
            switch_link: "Sign in here",
            rows: ROWS,
        },
    );
}
