//! User lookups and message submission against the portal backend.
//!
//! Transport detail is logged here and never reaches the UI; the messages
//! carry only the client's user-facing strings.

use iced::Task;
use tracing::warn;

use desk_client::PortalClient;
use desk_model::{MessageDraft, UserId};

use crate::message::{ComposeMessage, DetailMessage, DirectoryMessage, Message};

/// Fetch the directory roster.
///
/// Returns a Task that will produce a `DirectoryMessage::Loaded`.
pub fn load_roster(client: PortalClient) -> Task<Message> {
    Task::perform(
        async move {
            client.users().await.map_err(|e| {
                warn!("roster fetch failed: {e}");
                e.user_message().to_string()
            })
        },
        |result| Message::Directory(DirectoryMessage::Loaded(result)),
    )
}

/// Fetch one user's record, tagged with the identifier it was issued for.
///
/// The tag travels with the result so the detail handler can discard a
/// response that settles after the panel moved on to another target.
pub fn load_user(client: PortalClient, user_id: UserId) -> Task<Message> {
    Task::perform(
        async move {
            let result = client.user(&user_id).await.map_err(|e| {
                warn!(user_id = %user_id, "user lookup failed: {e}");
                e.user_message().to_string()
            });
            (user_id, result)
        },
        |(user_id, result)| Message::Detail(DetailMessage::Loaded { user_id, result }),
    )
}

/// Submit a composed message.
///
/// Returns a Task that will produce a `ComposeMessage::SubmitComplete`.
pub fn send_message(client: PortalClient, draft: MessageDraft) -> Task<Message> {
    Task::perform(
        async move {
            client.send_message(&draft).await.map_err(|e| {
                warn!(receiver = %draft.receiver_id, "message send failed: {e}");
                e.user_message().to_string()
            })
        },
        |result| Message::Compose(ComposeMessage::SubmitComplete(result)),
    )
}
