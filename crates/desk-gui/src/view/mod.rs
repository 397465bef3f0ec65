//! Views for Responder Desk.
//!
//! Views are pure functions from state to elements; every interaction they
//! offer is a [`Message`](crate::message::Message).

mod compose;
mod detail;
mod directory;

use iced::Element;
use iced::widget::button;
use iced::widget::text;

use crate::component;
use crate::message::{DetailMessage, Message};
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, button_secondary};

/// Render the root view: the directory, with the user detail dialog stacked
/// on top while it is open.
pub fn view_root(state: &AppState) -> Element<'_, Message> {
    let base = directory::view_directory(state);

    if !state.detail.open {
        return base;
    }

    let cancel: Element<'_, Message> = button(text("Cancel"))
        .on_press(Message::Detail(DetailMessage::Close))
        .padding([SPACING_SM, SPACING_MD])
        .style(button_secondary)
        .into();

    component::modal(
        base,
        "User Details",
        detail::view_detail(state),
        Message::Detail(DetailMessage::Close),
        vec![cancel],
    )
}
