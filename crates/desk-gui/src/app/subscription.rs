//! Application subscriptions.
//!
//! Keyboard events are the only reactive source this application needs;
//! every other state change flows from widget messages or settled tasks.

use iced::Subscription;
use iced::keyboard;

use crate::message::Message;

/// Create all application subscriptions.
pub fn create_subscription() -> Subscription<Message> {
    keyboard_subscription()
}

/// Keyboard event subscription.
///
/// Listens for all key press events to handle global shortcuts.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}
