//! Reusable UI components.
//!
//! - `modal` - dialog overlay with backdrop dismissal
//! - `status_badge` - pill-shaped status indicator
//! - `text_field` - labeled text input with validation error display

mod modal;
mod status_badge;
mod text_field;

pub use modal::modal;
pub use status_badge::{Status, status_badge};
pub use text_field::TextField;
