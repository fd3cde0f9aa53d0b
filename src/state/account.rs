//! Account payloads exchanged with the credential service

use super::forms::{FieldStore, EMAIL, FIRST_NAME, LAST_NAME, PASSWORD, PHONE};
use std::fmt;

/// Sign-in payload
#[derive(Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

impl SignInCredentials {
    pub fn from_store(store: &FieldStore) -> Self {
        Self {
            email: store.text(EMAIL).to_string(),
            password: store.text(PASSWORD).to_string(),
        }
    }
}

impl fmt::Debug for SignInCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up payload. The confirmation and consent fields are consumed by
/// validation and never leave the client.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl Registration {
    pub fn from_store(store: &FieldStore) -> Self {
        Self {
            first_name: store.text(FIRST_NAME).to_string(),
            last_name: store.text(LAST_NAME).to_string(),
            email: store.text(EMAIL).to_string(),
            phone: store.text(PHONE).to_string(),
            password: store.text(PASSWORD).to_string(),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed-in user as shown in the dashboard header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    /// Avatar letter: first character of the email, uppercased
    pub fn initial(&self) -> char {
        self.email
            .chars()
            .next()
            .or_else(|| self.name.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Result of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    #[allow(dead_code)] // Sent with authenticated calls; the dashboard makes none yet
    pub token: String,
    pub user: UserProfile,
}
