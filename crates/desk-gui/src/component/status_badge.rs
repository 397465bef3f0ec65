//! Status badge component.

use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use crate::theme::BORDER_RADIUS_FULL;

/// Status type for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Positive state (green)
    Success,
    /// Failure state (red)
    Error,
    /// Neutral/inactive state (gray)
    Neutral,
}

/// Creates a pill-shaped status badge.
///
/// ```rust,ignore
/// status_badge("Active", Status::Success)
/// ```
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, status: Status) -> Element<'a, M> {
    container(text(label.into()).size(12).style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let color = match status {
            Status::Success => palette.success.strong.color,
            Status::Error => palette.danger.strong.color,
            Status::Neutral => palette.background.base.text,
        };
        text::Style { color: Some(color) }
    }))
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = match status {
            Status::Success => palette.success.weak.color,
            Status::Error => palette.danger.weak.color,
            Status::Neutral => palette.background.weak.color,
        };
        container::Style {
            background: Some(background.into()),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .into()
}
