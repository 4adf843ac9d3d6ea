//! Request handlers.

pub mod health;
pub mod summarize;

pub use health::{health, index};
pub use summarize::summarize;
