//! User detail panel state.

use desk_model::{UserId, UserRecord};

/// What the detail panel currently shows.
///
/// Rebuilt from scratch on every open; a settled lookup moves the panel to
/// exactly one of the terminal variants, where it stays until the next open
/// or close.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailContent {
    /// Nothing to show; the panel only carries this while closed.
    #[default]
    Empty,

    /// Lookup in flight for the current target.
    Loading,

    /// Record fetched and displayable.
    Loaded(UserRecord),

    /// The backend reported the user as unavailable.
    Unavailable,

    /// The lookup failed - transport, status, or payload.
    Failed,
}

/// State of the user detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    /// Whether the panel is shown.
    pub open: bool,

    /// Identifier whose lookup result is allowed to mutate the panel.
    ///
    /// Set on open, cleared on close. A result tagged with any other
    /// identifier settled too late and must be dropped.
    pub target: Option<UserId>,

    /// Rendered content.
    pub content: DetailContent,
}

impl DetailPanel {
    /// True when a settled lookup for `user_id` is still the one we want.
    pub fn is_current(&self, user_id: &UserId) -> bool {
        self.open && self.target.as_ref() == Some(user_id)
    }

    /// Return to the closed state. Safe to call when already closed.
    pub fn reset(&mut self) {
        self.open = false;
        self.target = None;
        self.content = DetailContent::Empty;
    }
}
