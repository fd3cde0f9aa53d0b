//! Platform-specific keyboard shortcuts

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for form shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Ctrl is accepted everywhere since many terminals swallow Cmd
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SHORTCUT_MODIFIER)
}

#[cfg(target_os = "macos")]
mod labels {
    pub const REVEAL_SHORTCUT: &str = "Cmd+R";
    pub const SWITCH_FORM_SHORTCUT: &str = "Cmd+O";
    pub const GOOGLE_SHORTCUT: &str = "Cmd+G";
    pub const FACEBOOK_SHORTCUT: &str = "Cmd+F";
}

#[cfg(not(target_os = "macos"))]
mod labels {
    pub const REVEAL_SHORTCUT: &str = "Ctrl+R";
    pub const SWITCH_FORM_SHORTCUT: &str = "Ctrl+O";
    pub const GOOGLE_SHORTCUT: &str = "Ctrl+G";
    pub const FACEBOOK_SHORTCUT: &str = "Ctrl+F";
}

pub use labels::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_is_always_a_shortcut() {
        assert!(is_shortcut(KeyModifiers::CONTROL));
        assert!(is_shortcut(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
        assert!(!is_shortcut(KeyModifiers::SHIFT));
        assert!(!is_shortcut(KeyModifiers::NONE));
    }
}
