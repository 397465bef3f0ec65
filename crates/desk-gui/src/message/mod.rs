//! Message module for Responder Desk.
//!
//! Defines the message hierarchy for the Elm-style architecture. All user
//! interactions and settled background tasks flow through these types.

pub mod compose;
pub mod detail;
pub mod directory;

use iced::keyboard;

pub use compose::ComposeMessage;
pub use detail::DetailMessage;
pub use directory::DirectoryMessage;

/// Root message enum for the application.
///
/// The `update` function processes these messages to modify application
/// state; views never mutate anything directly.
#[derive(Debug, Clone)]
pub enum Message {
    /// Directory roster messages
    Directory(DirectoryMessage),

    /// User detail panel messages
    Detail(DetailMessage),

    /// Message composition form messages
    Compose(ComposeMessage),

    /// Keyboard event
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No operation - used for events we listen to but ignore
    Noop,
}
