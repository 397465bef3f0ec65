//! Responder Desk - Desktop client for the responder portal.
//!
//! Shows the user directory, opens a detail panel that fetches one user's
//! record on demand, and gates a message-composition form on whether that
//! user can currently be messaged.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message, Update, View).

use desk_client::PortalClient;
use desk_gui::app::App;
use desk_gui::state::Settings;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Responder Desk");

    let settings = Settings::load();
    let client = PortalClient::new(settings.server_url.clone())
        .expect("failed to initialize the HTTP client");

    // Run the Iced application using the builder pattern
    iced::application(
        move || App::new(settings.clone(), client.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        size: Size::new(960.0, 700.0),
        min_size: Some(Size::new(720.0, 540.0)),
        ..Default::default()
    })
    .run()
}
