//! Message composition form state.

use desk_model::UserId;

/// Outcome notice for the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeNotice {
    Sent,
    Failed(String),
}

/// State of the message composition form.
///
/// The form is visible by default. The detail panel owns the gate: it sets
/// `receiver` only for a rendered record that is not flagged inactive, and
/// hides the form whenever the shown user cannot receive messages. The
/// receiver is therefore set if and only if messaging is possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeForm {
    /// Identifier the draft will be sent to.
    pub receiver: Option<UserId>,

    /// Draft subject.
    pub subject: String,

    /// Draft body.
    pub body: String,

    /// Hidden exactly while the panel shows an unavailable or failed lookup.
    pub hidden: bool,

    /// Submission in flight.
    pub sending: bool,

    /// Result of the last submission, shown inline until dismissed.
    pub notice: Option<ComposeNotice>,
}

impl ComposeForm {
    /// Whether the draft can be submitted right now.
    pub fn can_submit(&self) -> bool {
        self.receiver.is_some() && !self.sending && !self.body.trim().is_empty()
    }

    /// Restore the gate to its defaults: no receiver, form visible.
    ///
    /// Draft text survives; only the gating state resets.
    pub fn reset_gate(&mut self) {
        self.receiver = None;
        self.hidden = false;
    }
}
