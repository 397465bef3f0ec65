//! User detail dialog content.
//!
//! One render function per panel content state, mirroring the state machine
//! exactly: loading, loaded record, unavailable notice, load failure. The
//! compose form renders underneath unless the panel has hidden it.

use iced::widget::{Space, column, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use desk_model::UserRecord;

use crate::component::{Status, status_badge};
use crate::constants::{DETAIL_LOAD_ERROR, DETAIL_UNAVAILABLE};
use crate::message::Message;
use crate::state::{AppState, DetailContent};
use crate::theme::{SPACING_MD, SPACING_SM, SPACING_XS};

/// Render the dialog body for the current panel state.
pub fn view_detail(state: &AppState) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &state.detail.content {
        DetailContent::Empty => Space::new().into(),
        DetailContent::Loading => view_loading(),
        DetailContent::Loaded(record) => view_record(record),
        DetailContent::Unavailable => view_unavailable(),
        DetailContent::Failed => view_failed(),
    };

    let mut content = column![body].spacing(SPACING_MD);
    if !state.compose.hidden {
        content = content.push(super::compose::view_compose(&state.compose));
    }

    content.into()
}

/// Lookup in flight.
fn view_loading() -> Element<'static, Message> {
    row![
        lucide::loader().size(16),
        Space::new().width(SPACING_SM),
        text("Loading user details...").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// All display fields of a fetched record.
///
/// Absent optional fields render as empty values, never as a placeholder
/// word. The status label comes from `is_active` and is display-only.
fn view_record(record: &UserRecord) -> Element<'_, Message> {
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    let status = if record.is_active {
        status_badge(record.status_label(), Status::Success)
    } else {
        status_badge(record.status_label(), Status::Neutral)
    };

    column![
        detail_row("Username", field(&record.username)),
        detail_row("Fullname", field(&record.fullname)),
        detail_row("Email", field(&record.email)),
        detail_row("Address", record.address_display()),
        detail_row("Phone", field(&record.phone)),
        detail_row("Profession", field(&record.profession)),
        detail_row("Organization", field(&record.organization)),
        detail_row("Role", field(&record.role)),
        row![detail_label("Status"), status].align_y(Alignment::Center),
    ]
    .spacing(SPACING_XS)
    .into()
}

/// The backend flagged the user as unavailable; nothing else is shown.
fn view_unavailable() -> Element<'static, Message> {
    text(DETAIL_UNAVAILABLE)
        .size(14)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            text::Style {
                color: Some(palette.background.strong.color),
            }
        })
        .into()
}

/// Generic load failure, whatever the cause.
fn view_failed() -> Element<'static, Message> {
    row![
        lucide::circle_alert().size(16),
        Space::new().width(SPACING_XS),
        text(DETAIL_LOAD_ERROR).size(14).style(|theme: &Theme| {
            let palette = theme.extended_palette();
            text::Style {
                color: Some(palette.danger.base.color),
            }
        }),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn detail_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![detail_label(label), text(value).size(13)]
        .align_y(Alignment::Center)
        .into()
}

fn detail_label(label: &'static str) -> Element<'static, Message> {
    text(label)
        .size(13)
        .width(Length::Fixed(110.0))
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            text::Style {
                color: Some(palette.background.strong.color),
            }
        })
        .into()
}
