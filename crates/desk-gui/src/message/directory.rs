//! Directory roster messages.

use desk_model::UserSummary;

/// Messages for the user directory view.
#[derive(Debug, Clone)]
pub enum DirectoryMessage {
    /// Reload the roster from the backend
    Refresh,

    /// Roster fetch completed
    Loaded(Result<Vec<UserSummary>, String>),
}
