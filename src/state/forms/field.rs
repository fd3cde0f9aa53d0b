//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// What kind of input a field accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, format not checked
    Text,
    /// Text that must look like an email address
    Email,
    /// Masked text with a visibility toggle
    Password,
    /// Checkbox
    Consent,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    pub kind: FieldKind,
    pub required: bool,
    /// Only meaningful for password fields
    pub revealed: bool,
}

impl FormField {
    /// Create a new required text field
    pub fn text(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Text, FieldValue::Text(String::new()))
    }

    /// Create a new required email field
    pub fn email(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Email, FieldValue::Text(String::new()))
    }

    /// Create a new required, masked password field
    pub fn password(name: &str, label: &str) -> Self {
        Self::with_kind(
            name,
            label,
            FieldKind::Password,
            FieldValue::Text(String::new()),
        )
    }

    /// Create a new consent checkbox, unchecked
    pub fn consent(name: &str, label: &str) -> Self {
        Self::with_kind(name, label, FieldKind::Consent, FieldValue::Flag(false))
    }

    fn with_kind(name: &str, label: &str, kind: FieldKind, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value,
            kind,
            required: true,
            revealed: false,
        }
    }

    /// Get the text value (returns empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (returns false for text fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Replace the value
    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
    }

    /// Value after typing `c`, or None when the key changes nothing.
    /// Checkboxes toggle on space and ignore other keys.
    pub fn with_char(&self, c: char) -> Option<FieldValue> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.push(c);
                Some(FieldValue::Text(next))
            }
            FieldValue::Flag(b) if c == ' ' => Some(FieldValue::Flag(!b)),
            FieldValue::Flag(_) => None,
        }
    }

    /// Value after a backspace, or None when there is nothing to delete
    pub fn without_last_char(&self) -> Option<FieldValue> {
        match &self.value {
            FieldValue::Text(s) if !s.is_empty() => {
                let mut next = s.clone();
                next.pop();
                Some(FieldValue::Text(next))
            }
            _ => None,
        }
    }

    pub fn is_masked(&self) -> bool {
        self.kind == FieldKind::Password && !self.revealed
    }

    /// Flip password visibility. No-op for other kinds.
    pub fn toggle_reveal(&mut self) {
        if self.kind == FieldKind::Password {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_masked() => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}
