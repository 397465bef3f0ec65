//! Directory roster message handlers.

use iced::Task;

use crate::app::App;
use crate::message::{DirectoryMessage, Message};
use crate::service;
use crate::state::RosterState;

impl App {
    /// Handle directory messages.
    pub fn handle_directory_message(&mut self, msg: DirectoryMessage) -> Task<Message> {
        match msg {
            DirectoryMessage::Refresh => {
                self.state.roster = RosterState::Loading;
                service::users::load_roster(self.client.clone())
            }

            DirectoryMessage::Loaded(Ok(users)) => {
                tracing::debug!(count = users.len(), "roster loaded");
                self.state.roster = RosterState::Loaded(users);
                Task::none()
            }

            DirectoryMessage::Loaded(Err(message)) => {
                self.state.roster = RosterState::Failed(message);
                Task::none()
            }
        }
    }
}
