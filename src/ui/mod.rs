//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::Login => forms::draw_login(frame, content_area, app),
        View::Register => forms::draw_register(frame, content_area, app),
        View::Dashboard => dashboard::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SimulatedCredentialService;
    use crate::state::MemorySessionStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::with_services(
            Arc::new(SimulatedCredentialService::instant()),
            Box::new(MemorySessionStore::default()),
            false,
        )
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_login_view_renders_form() {
        let screen = render(&app());
        assert!(screen.contains("Welcome Back"));
        assert!(screen.contains("Email Address"));
        assert!(screen.contains("Sign In"));
    }

    #[test]
    fn test_register_view_renders_form() {
        let mut app = app();
        app.navigate(View::Register);
        let screen = render(&app);
        assert!(screen.contains("Create Account"));
        assert!(screen.contains("First Name"));
    }

    #[test]
    fn test_dashboard_renders_sample_data() {
        let mut app = app();
        app.navigate(View::Dashboard);
        let screen = render(&app);
        assert!(screen.contains("Welcome back, Raghavendara!"));
        assert!(screen.contains("Traffic density: 65% of normal capacity"));
        assert!(screen.contains("Recent Trips"));
    }

    #[test]
    fn test_profile_menu_overlay() {
        let mut app = app();
        app.navigate(View::Dashboard);
        app.state.dashboard.toggle_menu();
        let screen = render(&app);
        assert!(screen.contains("Settings"));
        assert!(screen.contains("Logout"));
    }
}
