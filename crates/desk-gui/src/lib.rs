//! Responder Desk - GUI Library
//!
//! Core application types and modules for the Responder Desk desktop client.
//!
//! Built with Iced 0.14 using the Elm architecture.

pub mod app;
pub mod component;
pub mod constants;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;
