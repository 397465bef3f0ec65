//! Detail panel messages.

use desk_model::{UserId, UserRecord};

/// Messages for the user detail panel.
///
/// Every dismiss control (close button, cancel button, backdrop press,
/// Escape) routes through the single `Close` variant, so the panel has
/// exactly one exit path.
#[derive(Debug, Clone)]
pub enum DetailMessage {
    /// Open the panel for a user and start the lookup
    Open(UserId),

    /// The lookup settled, tagged with the identifier it was issued for.
    ///
    /// The tag lets the handler drop results that settle after the panel
    /// moved on to another user or was closed; completion order is not
    /// guaranteed to match issue order.
    Loaded {
        user_id: UserId,
        result: Result<UserRecord, String>,
    },

    /// Close the panel
    Close,
}
