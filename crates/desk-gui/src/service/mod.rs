//! Background task services.
//!
//! Async work runs through Iced's `Task::perform`; each function here wraps
//! one portal call and maps its outcome back into a [`Message`].
//!
//! [`Message`]: crate::message::Message

pub mod users;
