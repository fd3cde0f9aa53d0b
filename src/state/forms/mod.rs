//! Form domain layer
//!
//! Field values and the error slot live in [`FieldStore`]; the sign-up rule
//! set lives in [`validation`].

mod field;
mod form_state;
pub mod validation;

pub use field::{FieldKind, FormField};
pub use form_state::{
    FieldStore, Form, FormKind, FormState, LoginForm, RegisterForm, EMAIL, FIRST_NAME, LAST_NAME,
    PASSWORD, PHONE,
};
pub use validation::{validate, ValidationResult};

#[cfg(test)]
pub use form_state::{AGREE_TO_TERMS, CONFIRM_PASSWORD};
