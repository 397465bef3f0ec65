//! Compose form message handlers.
//!
//! Submission is possible only while the detail panel has gated a receiver
//! in; everything else about the form is ordinary input plumbing.

use iced::Task;

use desk_model::MessageDraft;

use crate::app::App;
use crate::message::{ComposeMessage, Message};
use crate::service;
use crate::state::ComposeNotice;

impl App {
    /// Handle compose form messages.
    pub fn handle_compose_message(&mut self, msg: ComposeMessage) -> Task<Message> {
        match msg {
            ComposeMessage::SubjectChanged(subject) => {
                self.state.compose.subject = subject;
                Task::none()
            }

            ComposeMessage::BodyChanged(body) => {
                self.state.compose.body = body;
                Task::none()
            }

            ComposeMessage::Submit => {
                if !self.state.compose.can_submit() {
                    return Task::none();
                }
                let Some(receiver) = self.state.compose.receiver.clone() else {
                    return Task::none();
                };

                self.state.compose.sending = true;
                self.state.compose.notice = None;

                let draft = MessageDraft {
                    receiver_id: receiver,
                    subject: self.state.compose.subject.clone(),
                    body: self.state.compose.body.clone(),
                };
                service::users::send_message(self.client.clone(), draft)
            }

            ComposeMessage::SubmitComplete(result) => {
                self.state.compose.sending = false;
                match result {
                    Ok(()) => {
                        self.state.compose.subject.clear();
                        self.state.compose.body.clear();
                        self.state.compose.notice = Some(ComposeNotice::Sent);
                    }
                    Err(message) => {
                        self.state.compose.notice = Some(ComposeNotice::Failed(message));
                    }
                }
                Task::none()
            }

            ComposeMessage::DismissNotice => {
                self.state.compose.notice = None;
                Task::none()
            }
        }
    }
}
