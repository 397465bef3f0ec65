//! Theme for Responder Desk.
//!
//! A single flat module: the palette, spacing constants, and widget style
//! functions. Style functions receive `&Theme` and read the extended
//! palette, so views never hardcode colors.
//!
//! ```rust,ignore
//! use crate::theme::{SPACING_MD, button_primary};
//!
//! button(text("Send")).padding(SPACING_MD).style(button_primary)
//! ```

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Large radius - modals, dialogs
pub const BORDER_RADIUS_LG: f32 = 8.0;

/// Pill radius - badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Width of the detail dialog.
pub const MODAL_WIDTH_MD: f32 = 480.0;

/// Semi-transparent overlay behind the detail dialog.
pub const BACKDROP: Color = Color {
    r: 0.06,
    g: 0.07,
    b: 0.09,
    a: 0.55,
};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the portal theme.
///
/// Iced derives the extended palette (hover/pressed/weak variants) from
/// these six colors; all widget styles below read from that.
pub fn portal_theme() -> Theme {
    Theme::custom(
        "Portal Light".to_string(),
        Palette {
            background: Color::from_rgb(0.98, 0.98, 0.99),
            text: Color::from_rgb(0.12, 0.13, 0.16),
            primary: Color::from_rgb(0.16, 0.42, 0.75),
            success: Color::from_rgb(0.20, 0.62, 0.38),
            warning: Color::from_rgb(0.93, 0.65, 0.10),
            danger: Color::from_rgb(0.82, 0.25, 0.25),
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Active => palette.primary.base.color,
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.strong.color,
        button::Status::Disabled => palette.primary.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
///
/// Subtle background with border emphasis.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button style - borderless controls such as the dialog close button.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: palette.background.strong.color,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Elevated card/dialog surface.
pub fn surface_elevated(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: BORDER_RADIUS_LG.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}
