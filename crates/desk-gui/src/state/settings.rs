//! Application settings.

/// Portal backend used when nothing else is configured.
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the portal backend.
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Load settings, honoring the `DESK_SERVER_URL` environment override.
    pub fn load() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("DESK_SERVER_URL") {
            if !url.trim().is_empty() {
                tracing::info!("using portal backend {url}");
                settings.server_url = url;
            }
        }
        settings
    }
}
