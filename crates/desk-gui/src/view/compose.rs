//! Message composition form.
//!
//! Renders under the detail dialog's content. The send control is enabled
//! only while the detail panel has gated a receiver in.

use iced::widget::{button, column, row, space, text};
use iced::{Alignment, Element, Theme};

use crate::component::TextField;
use crate::constants::MESSAGE_SENT;
use crate::message::{ComposeMessage, Message};
use crate::state::{ComposeForm, ComposeNotice};
use crate::theme::{SPACING_MD, SPACING_SM, button_ghost, button_primary};

/// Render the compose form.
pub fn view_compose(form: &ComposeForm) -> Element<'_, Message> {
    let subject = TextField::new("Subject", &form.subject, "Subject", |s| {
        Message::Compose(ComposeMessage::SubjectChanged(s))
    })
    .view();

    let body = TextField::new("Message", &form.body, "Write your message...", |s| {
        Message::Compose(ComposeMessage::BodyChanged(s))
    })
    .view();

    let send_label = if form.sending {
        "Sending..."
    } else {
        "Send Message"
    };
    let send_btn = button(text(send_label).size(13))
        .on_press_maybe(
            form.can_submit()
                .then_some(Message::Compose(ComposeMessage::Submit)),
        )
        .padding([SPACING_SM, SPACING_MD])
        .style(button_primary);

    let mut footer = row![].spacing(SPACING_SM).align_y(Alignment::Center);
    if let Some(notice) = &form.notice {
        footer = footer.push(view_notice(notice));
    }
    footer = footer.push(space::horizontal()).push(send_btn);

    column![text("Send a message").size(14), subject, body, footer]
        .spacing(SPACING_SM)
        .into()
}

fn view_notice(notice: &ComposeNotice) -> Element<'_, Message> {
    let (label, is_error): (&str, bool) = match notice {
        ComposeNotice::Sent => (MESSAGE_SENT, false),
        ComposeNotice::Failed(message) => (message, true),
    };

    row![
        text(label.to_string()).size(12).style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let color = if is_error {
                palette.danger.base.color
            } else {
                palette.success.base.color
            };
            text::Style { color: Some(color) }
        }),
        button(text("Dismiss").size(11))
            .on_press(Message::Compose(ComposeMessage::DismissNotice))
            .padding([2.0, 6.0])
            .style(button_ghost),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
