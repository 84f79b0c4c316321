//! Application state

use country_explorer_core::ViewStateController;

use super::{CountriesState, InputMode, LoadState, ModalState};

/// Application state
pub struct App {
    /// Whether the main loop should stop
    pub should_quit: bool,

    /// Status bar message
    pub status_message: Option<String>,

    /// Dataset load progress
    pub load_state: LoadState,

    /// Normal or search input
    pub input_mode: InputMode,

    /// Sort/search/page state; its presenter is the table state
    pub explorer: ViewStateController<CountriesState>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            load_state: LoadState::Loading,
            input_mode: InputMode::Normal,
            explorer: ViewStateController::new(CountriesState::new()),
        }
    }

    /// Table state
    pub fn countries(&self) -> &CountriesState {
        self.explorer.presenter()
    }

    pub fn countries_mut(&mut self) -> &mut CountriesState {
        self.explorer.presenter_mut()
    }

    pub fn modal(&self) -> &ModalState {
        &self.countries().modal
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
