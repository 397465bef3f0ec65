//! Labeled text input component.

use iced::widget::{column, text, text_input};
use iced::{Element, Theme};

use crate::theme::{SPACING_SM, SPACING_XS, text_input_default};

/// A text input with a label and an optional validation error.
///
/// ```rust,ignore
/// TextField::new("Subject", &form.subject, "Subject", |s| {
///     Message::Compose(ComposeMessage::SubjectChanged(s))
/// })
/// .view()
/// ```
pub struct TextField<M> {
    label: String,
    value: String,
    placeholder: String,
    on_change: Box<dyn Fn(String) -> M>,
    error: Option<String>,
}

impl<M: Clone + 'static> TextField<M> {
    /// Create a new text field.
    pub fn new(
        label: impl Into<String>,
        value: &str,
        placeholder: impl Into<String>,
        on_change: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
            placeholder: placeholder.into(),
            on_change: Box::new(on_change),
            error: None,
        }
    }

    /// Set an error message to display under the input.
    pub fn error(mut self, error: Option<impl Into<String>>) -> Self {
        self.error = error.map(Into::into);
        self
    }

    /// Build the text field element.
    pub fn view(self) -> Element<'static, M> {
        let input = text_input(&self.placeholder, &self.value)
            .on_input(self.on_change)
            .padding(SPACING_SM)
            .style(text_input_default);

        let mut field = column![
            text(self.label).size(12).style(|theme: &Theme| {
                let palette = theme.extended_palette();
                text::Style {
                    color: Some(palette.background.strong.color),
                }
            }),
            input,
        ]
        .spacing(SPACING_XS);

        if let Some(err) = self.error {
            field = field.push(text(err).size(11).style(|theme: &Theme| {
                let palette = theme.extended_palette();
                text::Style {
                    color: Some(palette.danger.base.color),
                }
            }));
        }

        field.into()
    }
}
