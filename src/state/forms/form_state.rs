//! Form state management and form structs

use super::field::{FieldKind, FieldValue, FormField};
use thiserror::Error;

pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const AGREE_TO_TERMS: &str = "agreeToTerms";

/// Which credential form an instance belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
}

impl FormKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

/// Field-level constraint violations, checked before any submit-time rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please fill out the {0} field")]
    Missing(String),
    #[error("Please enter a valid email address")]
    MalformedEmail,
}

/// Named field values plus the single error slot shared by a form
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: Vec<FormField>,
    error: Option<String>,
}

impl FieldStore {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            error: None,
        }
    }

    /// Update a named field and clear any pending error.
    ///
    /// Returns false when no field has that name; nothing is created.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.set_value(value.into());
                self.error = None;
                true
            }
            None => false,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields.get_mut(index)
    }

    pub fn count(&self) -> usize {
        self.fields.len()
    }

    /// Text of a named field, empty when absent
    pub fn text(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or_default()
    }

    /// Flag of a named field, false when absent
    pub fn flag(&self, name: &str) -> bool {
        self.field(name).is_some_and(FormField::as_flag)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Check required and email-shaped fields in display order.
    ///
    /// Consent flags are left to the submit-time rule set.
    pub fn check_constraints(&self) -> Result<(), FieldError> {
        for field in &self.fields {
            match field.kind {
                FieldKind::Consent => {}
                _ if field.required && field.as_text().is_empty() => {
                    return Err(FieldError::Missing(field.label.clone()));
                }
                FieldKind::Email if !is_email_shaped(field.as_text()) => {
                    return Err(FieldError::MalformedEmail);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Loose email shape: `local@domain` with no whitespace and no empty domain labels
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Trait for common form operations
pub trait Form {
    fn kind(&self) -> FormKind;
    fn store(&self) -> &FieldStore;
    fn store_mut(&mut self) -> &mut FieldStore;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.store().count()
    }
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    /// Type into the active field. Keys that change nothing keep the error.
    fn input_char(&mut self, c: char) {
        let next = self
            .active_field_ref()
            .and_then(|f| Some((f.name.clone(), f.with_char(c)?)));
        if let Some((name, value)) = next {
            self.store_mut().set_field(&name, value);
        }
    }
    fn backspace(&mut self) {
        let next = self
            .active_field_ref()
            .and_then(|f| Some((f.name.clone(), f.without_last_char()?)));
        if let Some((name, value)) = next {
            self.store_mut().set_field(&name, value);
        }
    }
    /// Toggle visibility of the active field if it is a password
    fn toggle_reveal(&mut self) {
        let index = self.active_field();
        if let Some(field) = self.store_mut().get_mut(index) {
            field.toggle_reveal();
        }
    }
    fn active_field_ref(&self) -> Option<&FormField> {
        self.store().get(self.active_field())
    }
}

/// Enum representing all possible form states
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Login(LoginForm),
    Register(RegisterForm),
}

impl FormState {
    pub fn as_form(&self) -> Option<&dyn Form> {
        match self {
            FormState::None => None,
            FormState::Login(f) => Some(f),
            FormState::Register(f) => Some(f),
        }
    }

    pub fn as_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self {
            FormState::None => None,
            FormState::Login(f) => Some(f),
            FormState::Register(f) => Some(f),
        }
    }
}

// Login Form
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub store: FieldStore,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            store: FieldStore::new(vec![
                FormField::email(EMAIL, "Email Address"),
                FormField::password(PASSWORD, "Password"),
            ]),
            active_field_index: 0,
        }
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoginForm {
    fn kind(&self) -> FormKind {
        FormKind::SignIn
    }
    fn store(&self) -> &FieldStore {
        &self.store
    }
    fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.store.count() - 1);
    }
}

// Register Form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub store: FieldStore,
    pub active_field_index: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            store: FieldStore::new(vec![
                FormField::text(FIRST_NAME, "First Name"),
                FormField::text(LAST_NAME, "Last Name"),
                FormField::email(EMAIL, "Email Address"),
                FormField::text(PHONE, "Phone Number"),
                FormField::password(PASSWORD, "Password"),
                FormField::password(CONFIRM_PASSWORD, "Confirm Password"),
                FormField::consent(AGREE_TO_TERMS, "I agree to the Terms & Conditions and Privacy Policy"),
            ]),
            active_field_index: 0,
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn kind(&self) -> FormKind {
        FormKind::SignUp
    }
    fn store(&self) -> &FieldStore {
        &self.store
    }
    fn store_mut(&mut self) -> &mut FieldStore {
        &mut self.store
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.store.count() - 1);
    }
}
