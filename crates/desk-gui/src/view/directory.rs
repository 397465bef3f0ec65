//! User directory view.
//!
//! Lists the roster with an Active/Inactive badge per user; each row's
//! "View Details" control is the trigger that opens the detail dialog.

use iced::widget::{Space, button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use desk_model::UserSummary;

use crate::component::{Status, status_badge};
use crate::message::{DetailMessage, DirectoryMessage, Message};
use crate::state::{AppState, RosterState};
use crate::theme::{
    BORDER_RADIUS_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_primary,
    button_secondary,
};

/// Render the directory view.
pub fn view_directory(state: &AppState) -> Element<'_, Message> {
    let refresh_btn = button(
        row![
            lucide::refresh_cw().size(14),
            Space::new().width(SPACING_XS),
            text("Refresh").size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Directory(DirectoryMessage::Refresh))
    .padding([SPACING_SM, SPACING_MD])
    .style(button_secondary);

    let header = row![
        text("User Directory").size(20),
        space::horizontal(),
        refresh_btn,
    ]
    .align_y(Alignment::Center);

    let body: Element<'_, Message> = match &state.roster {
        RosterState::Loading => centered_note("Loading directory..."),
        RosterState::Failed(message) => view_roster_error(message),
        RosterState::Loaded(users) if users.is_empty() => centered_note("No users to show."),
        RosterState::Loaded(users) => view_roster(users),
    };

    container(
        column![header, body]
            .spacing(SPACING_MD)
            .width(Length::Fill),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_roster(users: &[UserSummary]) -> Element<'_, Message> {
    let rows = users.iter().fold(
        column![].spacing(SPACING_XS),
        |col, user| col.push(view_roster_row(user)),
    );

    scrollable(rows).height(Length::Fill).into()
}

fn view_roster_row(user: &UserSummary) -> Element<'_, Message> {
    let badge = if user.is_active {
        status_badge("Active", Status::Success)
    } else {
        status_badge("Inactive", Status::Neutral)
    };

    let details_btn = button(text("View Details").size(13))
        .on_press(Message::Detail(DetailMessage::Open(user.id.clone())))
        .padding([SPACING_XS, SPACING_MD])
        .style(button_primary);

    container(
        row![
            text(&user.username).size(14),
            Space::new().width(SPACING_SM),
            badge,
            space::horizontal(),
            details_btn,
        ]
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, SPACING_MD])
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            border: iced::Border {
                radius: BORDER_RADIUS_SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}

fn view_roster_error(message: &str) -> Element<'_, Message> {
    column![
        row![
            lucide::circle_alert().size(16),
            Space::new().width(SPACING_XS),
            text(message.to_string()).size(14).style(|theme: &Theme| {
                let palette = theme.extended_palette();
                text::Style {
                    color: Some(palette.danger.base.color),
                }
            }),
        ]
        .align_y(Alignment::Center),
        button(text("Try Again").size(13))
            .on_press(Message::Directory(DirectoryMessage::Refresh))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_secondary),
    ]
    .spacing(SPACING_SM)
    .into()
}

fn centered_note(note: &str) -> Element<'_, Message> {
    container(text(note.to_string()).size(14))
        .center_x(Length::Fill)
        .padding(SPACING_LG)
        .into()
}
