//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `auth_layout`: Card shared by both credential forms
//! - `login_form`: Sign-in form
//! - `register_form`: Sign-up form

mod auth_layout;
mod field_renderer;
mod login_form;
mod register_form;

pub use login_form::draw_login;
pub use register_form::draw_register;
