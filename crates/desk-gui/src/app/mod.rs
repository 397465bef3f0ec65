//! Main application module for Responder Desk.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Use `Task::perform` for async operations
//!
//! # Module Structure
//!
//! - `handler/` - Message handlers organized by category
//! - `subscription` - Reactive event sources (keyboard)

mod handler;
pub mod subscription;

use iced::{Element, Subscription, Task, Theme};

use desk_client::PortalClient;

use crate::message::Message;
use crate::service;
use crate::state::{AppState, Settings};
use crate::theme::portal_theme;
use crate::view;

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and the shared portal client handed to background tasks.
pub struct App {
    /// All application state.
    pub state: AppState,
    /// Portal client; cloned into each spawned task.
    pub client: PortalClient,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. Returns the initial state and the roster
    /// fetch that populates the directory.
    pub fn new(settings: Settings, client: PortalClient) -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::new(settings),
            client,
        };

        let load_roster = service::users::load_roster(app.client.clone());
        (app, load_roster)
    }

    /// Update application state in response to a message.
    ///
    /// This is the core of the Elm architecture - all state changes happen here.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Directory(msg) => self.handle_directory_message(msg),
            Message::Detail(msg) => self.handle_detail_message(msg),
            Message::Compose(msg) => self.handle_compose_message(msg),
            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),
            Message::Noop => Task::none(),
        }
    }

    /// Render the current view.
    pub fn view(&self) -> Element<'_, Message> {
        view::view_root(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        String::from("Responder Desk")
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        portal_theme()
    }

    /// Application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription()
    }
}
