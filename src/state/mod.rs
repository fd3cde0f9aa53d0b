//! Application state module

mod account;
mod app_state;
mod dashboard;
pub mod forms;
mod session;
mod submission;

pub use account::*;
pub use app_state::*;
pub use dashboard::*;
pub use session::*;
pub use submission::*;
