//! Detail panel message handlers.
//!
//! The panel opens immediately and fills in when the lookup settles; the
//! open transition never waits on the network. Exactly one lookup is
//! "current" at a time: results are applied only if tagged with the panel's
//! current target, so a response that settles after a newer open or a close
//! is dropped instead of rendered.

use iced::Task;
use tracing::{debug, warn};

use desk_model::UserRecord;

use crate::app::App;
use crate::message::{DetailMessage, Message};
use crate::service;
use crate::state::DetailContent;

impl App {
    /// Handle detail panel messages.
    pub fn handle_detail_message(&mut self, msg: DetailMessage) -> Task<Message> {
        match msg {
            DetailMessage::Open(user_id) => {
                self.state.detail.open = true;
                self.state.detail.target = Some(user_id.clone());
                self.state.detail.content = DetailContent::Loading;

                // Clean slate: a previous record's receiver must not survive
                // while the new lookup is pending.
                self.state.compose.reset_gate();

                service::users::load_user(self.client.clone(), user_id)
            }

            DetailMessage::Loaded { user_id, result } => {
                if !self.state.detail.is_current(&user_id) {
                    debug!(user_id = %user_id, "dropping lookup result for a superseded target");
                    return Task::none();
                }
                self.apply_lookup(result);
                Task::none()
            }

            DetailMessage::Close => {
                self.state.detail.reset();
                self.state.compose.reset_gate();
                Task::none()
            }
        }
    }

    /// Apply a settled lookup to the panel and the compose gate.
    fn apply_lookup(&mut self, result: Result<UserRecord, String>) {
        match result {
            Err(_) => {
                self.state.detail.content = DetailContent::Failed;
                self.state.compose.receiver = None;
                self.state.compose.hidden = true;
            }

            // The explicit unavailability flag wins over everything else in
            // the record, including `is_active`.
            Ok(record) if record.inactive => {
                self.state.detail.content = DetailContent::Unavailable;
                self.state.compose.receiver = None;
                self.state.compose.hidden = true;
            }

            Ok(record) => match record.id.clone() {
                Some(id) => {
                    self.state.compose.receiver = Some(id);
                    self.state.compose.hidden = false;
                    self.state.detail.content = DetailContent::Loaded(record);
                }
                None => {
                    // An available record without an identifier is malformed;
                    // fold it into the generic failure presentation.
                    warn!("user record arrived without an id");
                    self.state.detail.content = DetailContent::Failed;
                    self.state.compose.receiver = None;
                    self.state.compose.hidden = true;
                }
            },
        }
    }
}
