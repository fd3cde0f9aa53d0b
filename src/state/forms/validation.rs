//! Submit-time rule set for the sign-up form
//!
//! Rules run in a fixed order and the first failure wins:
//! password confirmation, minimum length, then terms consent.

use super::form_state::{FieldStore, AGREE_TO_TERMS, CONFIRM_PASSWORD, PASSWORD};
use thiserror::Error;

/// Minimum number of characters in a new password.
///
/// Counted in Unicode scalar values, so `"😀😀😀😀"` is four characters
/// and too short even though it is eight UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,
}

/// Result of a single validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(e) => Self::Invalid(e.to_string()),
        }
    }
}

/// Run the ordered rules, stopping at the first failure
pub fn check(form: &FieldStore) -> Result<(), ValidationError> {
    let password = form.text(PASSWORD);
    if password != form.text(CONFIRM_PASSWORD) {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !form.flag(AGREE_TO_TERMS) {
        return Err(ValidationError::TermsNotAccepted);
    }
    Ok(())
}

pub fn validate(form: &FieldStore) -> ValidationResult {
    check(form).into()
}
