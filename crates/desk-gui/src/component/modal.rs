//! Modal dialog overlay component.
//!
//! A dialog centered over the base content with a semi-transparent backdrop.
//! Pressing the backdrop dismisses the dialog, as does the header close
//! button; both emit the same message so the caller keeps a single exit path.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text};
use iced::{Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BACKDROP, MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost, surface_elevated,
};

/// Creates a modal dialog overlay.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Dialog title text
/// * `content` - Dialog body content
/// * `on_dismiss` - Message sent by the close button and the backdrop
/// * `actions` - Action buttons for the footer
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_dismiss: M,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    // Header with title and close button
    let header = row![
        text(title.to_string()).size(18),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(on_dismiss.clone())
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    // Action buttons row
    let action_row = {
        let mut r = row![space::horizontal()].spacing(SPACING_SM);
        for action in actions {
            r = r.push(action);
        }
        r
    };

    // Dialog box
    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(surface_elevated);

    // Stack layers: base -> backdrop -> dialog. The dialog itself is opaque,
    // so only presses outside it reach the dismissing mouse area.
    let overlay = mouse_area(
        center(opaque(dialog)).style(|_theme: &Theme| container::Style {
            background: Some(BACKDROP.into()),
            ..Default::default()
        }),
    )
    .on_press(on_dismiss);

    stack![base, opaque(overlay)].into()
}
