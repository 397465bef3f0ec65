//! Message composition form messages.

/// Messages for the compose form shown under a loaded user's details.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Subject input edited
    SubjectChanged(String),

    /// Body input edited
    BodyChanged(String),

    /// Submit the draft to the current receiver
    Submit,

    /// Submission completed
    SubmitComplete(Result<(), String>),

    /// Dismiss the sent/failed notice
    DismissNotice,
}
