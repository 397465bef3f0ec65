//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use super::compose::ComposeForm;
use super::detail::DetailPanel;
use super::directory::RosterState;
use super::settings::Settings;

/// Top-level application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Application settings
    pub settings: Settings,
    /// Directory roster
    pub roster: RosterState,
    /// User detail panel
    pub detail: DetailPanel,
    /// Message composition form, gated by the detail panel
    pub compose: ComposeForm,
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }
}
