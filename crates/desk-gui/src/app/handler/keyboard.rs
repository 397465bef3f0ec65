//! Keyboard shortcut message handlers.
//!
//! Handles:
//! - Escape (close the detail panel)
//! - Cmd/Ctrl+R (refresh the roster)

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::{DetailMessage, DirectoryMessage, Message};

impl App {
    /// Handle keyboard shortcuts.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match key.as_ref() {
            // Cmd/Ctrl+R: reload the roster
            keyboard::Key::Character("r") if modifiers.command() => {
                Task::done(Message::Directory(DirectoryMessage::Refresh))
            }

            // Escape: close the detail panel while it is open
            keyboard::Key::Named(Named::Escape) if self.state.detail.open => {
                Task::done(Message::Detail(DetailMessage::Close))
            }

            _ => Task::none(),
        }
    }
}
