//! Reusable UI components

mod button;
mod social;

pub use button::{render_button, render_submit_button, BUTTON_HEIGHT};
pub use social::{render_social_buttons, SOCIAL_HEIGHT};
