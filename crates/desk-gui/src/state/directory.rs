//! Directory roster state.

use desk_model::UserSummary;

/// Loading state of the user directory.
#[derive(Debug, Clone, Default)]
pub enum RosterState {
    /// Fetch in flight (also the startup state).
    #[default]
    Loading,

    /// Roster fetched.
    Loaded(Vec<UserSummary>),

    /// Fetch failed; holds the user-facing message.
    Failed(String),
}
