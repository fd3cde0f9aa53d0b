//! Application state definitions

use super::dashboard::{DashboardData, DashboardState};
use super::forms::{FormKind, FormState, LoginForm, RegisterForm};
use super::submission::SubmissionController;
use chrono::Utc;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
}

impl View {
    /// Views that host a credential form
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Login | View::Register)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Welcome Back",
            View::Register => "Join NeuroFleetX",
            View::Dashboard => "NeuroFleetX",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Login => "Sign in to your NeuroFleetX account",
            View::Register => "Create your account to get started",
            View::Dashboard => "Monitor your urban mobility network in real-time",
        }
    }
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form state, recreated each time a form view is entered
    pub form: FormState,
    pub submission: SubmissionController,

    pub dashboard: DashboardState,

    // UI state
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl AppState {
    pub fn new(dark_mode: bool) -> Self {
        let mut state = Self {
            current_view: View::Login,
            view_history: Vec::new(),
            form: FormState::None,
            submission: SubmissionController::new(FormKind::SignIn),
            dashboard: DashboardState::new(DashboardData::sample(Utc::now()), dark_mode),
            status_message: None,
        };
        state.mount(View::Login);
        state
    }

    /// Switch to `view`, remembering where we came from
    pub fn navigate(&mut self, view: View) {
        self.view_history.push(self.current_view);
        self.mount(view);
    }

    /// Enter a view, resetting any form it hosts
    fn mount(&mut self, view: View) {
        self.current_view = view;
        match view {
            View::Login => {
                self.form = FormState::Login(LoginForm::new());
                self.submission = SubmissionController::new(FormKind::SignIn);
            }
            View::Register => {
                self.form = FormState::Register(RegisterForm::new());
                self.submission = SubmissionController::new(FormKind::SignUp);
            }
            View::Dashboard => {
                self.form = FormState::None;
                self.dashboard.close_menu();
            }
        }
    }

    /// Number of navigations performed so far
    #[cfg(test)]
    pub fn navigation_count(&self) -> usize {
        self.view_history.len()
    }

    pub fn is_submitting(&self) -> bool {
        self.current_view.is_form_view() && self.submission.is_busy()
    }
}
