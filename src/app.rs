//! Application state and core logic

use crate::auth::CredentialService;
use crate::config::TuiConfig;
use crate::platform;
use crate::state::forms::{Form, FormKind};
use crate::state::{
    perform, AppState, FileSessionStore, ProfileMenuItem, SessionContext, SessionStore,
    SubmissionReport, SubmitAttempt, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Messages delivered to the UI task from background work
#[derive(Debug)]
pub enum AppMessage {
    SubmissionFinished(SubmissionReport),
}

/// Social sign-in providers offered under each form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Signed-in session and its backing store
    pub session: SessionContext,
    /// Backend for sign-in and sign-up
    credentials: Arc<dyn CredentialService>,
    message_tx: UnboundedSender<AppMessage>,
    message_rx: UnboundedReceiver<AppMessage>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let credentials = config.credential_service()?;
        Ok(Self::with_services(
            credentials,
            Box::new(FileSessionStore::new()),
            config.dark_mode(),
        ))
    }

    pub fn with_services(
        credentials: Arc<dyn CredentialService>,
        store: Box<dyn SessionStore>,
        dark_mode: bool,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(dark_mode),
            session: SessionContext::new(store),
            credentials,
            message_tx,
            message_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        tracing::info!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.status_message = None;
        self.state.navigate(view);
    }

    /// Apply every message that background tasks have sent so far
    pub fn drain_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SubmissionFinished(report) => self.finish_submission(report),
        }
    }

    fn finish_submission(&mut self, report: SubmissionReport) {
        let Some(form) = self.state.form.as_form_mut() else {
            tracing::warn!(form = report.kind.label(), "submission finished with no form mounted");
            return;
        };

        let destination = self.state.submission.finish(form.store_mut(), &report);

        if let Some(session) = report.session {
            if destination.is_some() {
                self.session.begin(session);
            }
        }
        if let Some(view) = destination {
            self.navigate(view);
            if report.kind == FormKind::SignUp {
                self.state.status_message = Some("Account created. Please sign in.".to_string());
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Login | View::Register => self.handle_form_key(key),
            View::Dashboard => self.handle_dashboard_key(key),
        }
    }

    /// Handle keys in the sign-in and sign-up views
    fn handle_form_key(&mut self, key: KeyEvent) {
        let shortcut = platform::is_shortcut(key.modifiers);

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.with_form(|f| f.next_field()),
            KeyCode::BackTab | KeyCode::Up => self.with_form(|f| f.prev_field()),
            KeyCode::Char('r') if shortcut => self.with_form(|f| f.toggle_reveal()),
            KeyCode::Char('o') if shortcut => self.switch_form(),
            KeyCode::Char('g') if shortcut => self.social_login(SocialProvider::Google),
            KeyCode::Char('f') if shortcut => self.social_login(SocialProvider::Facebook),
            KeyCode::Char(c) if !shortcut => self.with_form(|f| f.input_char(c)),
            KeyCode::Backspace => self.with_form(|f| f.backspace()),
            KeyCode::Esc => match self.state.current_view {
                View::Register => self.navigate(View::Login),
                _ => self.quit = true,
            },
            _ => {}
        }
    }

    fn with_form(&mut self, apply: impl FnOnce(&mut dyn Form)) {
        if let Some(form) = self.state.form.as_form_mut() {
            apply(form);
        }
    }

    /// Follow the "Sign up here" / "Sign in here" link
    fn switch_form(&mut self) {
        match self.state.current_view {
            View::Login => self.navigate(View::Register),
            View::Register => self.navigate(View::Login),
            View::Dashboard => {}
        }
    }

    fn social_login(&mut self, provider: SocialProvider) {
        let action = match self.state.form.as_form().map(|f| f.kind()) {
            Some(FormKind::SignUp) => "signup",
            _ => "login",
        };
        tracing::info!("{} {} clicked", provider.label(), action);
        self.state.status_message = Some(format!("{} sign-in is not available yet", provider.label()));
    }

    /// Run the submission controller and spawn the credential call
    fn submit(&mut self) {
        let Some(form) = self.state.form.as_form_mut() else {
            return;
        };

        match self.state.submission.begin(form.store_mut()) {
            SubmitAttempt::Busy => {}
            SubmitAttempt::Rejected(reason) => {
                tracing::debug!(%reason, "submit rejected before any call");
            }
            SubmitAttempt::Started { attempt, request } => {
                let credentials = Arc::clone(&self.credentials);
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let report = perform(credentials, attempt, request).await;
                    if tx.send(AppMessage::SubmissionFinished(report)).is_err() {
                        tracing::debug!("app closed before submission finished");
                    }
                });
            }
        }
    }

    /// Handle keys in the dashboard
    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        if self.state.dashboard.menu_open {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.state.dashboard.prev_menu_item(),
                KeyCode::Down | KeyCode::Char('j') => self.state.dashboard.next_menu_item(),
                KeyCode::Enter => self.select_menu_item(self.state.dashboard.selected_menu_item()),
                KeyCode::Esc | KeyCode::Char('p') => self.state.dashboard.close_menu(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => {
                self.state.dashboard.prev_action()
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => {
                self.state.dashboard.next_action()
            }
            KeyCode::Enter => {
                let action = self.state.dashboard.selected_action();
                tracing::info!("{} clicked", action.title());
                self.state.status_message = Some(format!("{} opened", action.title()));
            }
            KeyCode::Char('p') => self.state.dashboard.toggle_menu(),
            KeyCode::Char('d') => {
                self.state.dashboard.dark_mode = !self.state.dashboard.dark_mode;
            }
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    fn select_menu_item(&mut self, item: ProfileMenuItem) {
        self.state.dashboard.close_menu();
        match item {
            ProfileMenuItem::Logout => self.logout(),
            ProfileMenuItem::Profile | ProfileMenuItem::Settings => {
                tracing::info!("{} clicked", item.label());
            }
        }
    }

    /// Clear the persisted session keys and return to the sign-in form
    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            tracing::warn!("Failed to clear session store: {e}");
        }
        self.navigate(View::Login);
    }
}
