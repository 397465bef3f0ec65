//! Application state for Responder Desk.
//!
//! All state lives under [`AppState`] and is mutated exclusively by the
//! handlers in `app/handler/`; views read it and nothing else.

pub mod app_state;
pub mod compose;
pub mod detail;
pub mod directory;
pub mod settings;

pub use app_state::AppState;
pub use compose::{ComposeForm, ComposeNotice};
pub use detail::{DetailContent, DetailPanel};
pub use directory::RosterState;
pub use settings::Settings;
