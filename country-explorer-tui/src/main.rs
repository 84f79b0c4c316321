//! Country Explorer TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`)
//! - **Message**: event messages (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: input handling (`event/`)
//! - **Backend**: config and data services (`backend/`)
//!
//! The table itself is driven by the core [`ViewStateController`]; the
//! model's [`CountriesState`](model::CountriesState) is its presenter.
//!
//! Startup order:
//!
//! ```text
//! load config ─▶ init logging ─▶ spawn fetch ─▶ init terminal ─▶ run loop ─▶ restore terminal
//! ```
//!
//! [`ViewStateController`]: country_explorer_core::ViewStateController

mod app;
mod backend;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{AppConfig, ConfigService, CountryService, LocalConfigService};
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Configuration (falls back to defaults)
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    // 2. Logging to a file; the terminal belongs to the UI
    logging::init(&config.log_file_path())?;
    if let Some(e) = config_error {
        tracing::warn!("Using default configuration: {e}");
    }
    tracing::debug!("Config file: {}", config_service.path().display());
    tracing::info!("Starting country explorer (endpoint: {})", config.endpoint());

    view::theme::set_theme(config.theme);

    // 3. Kick off the single dataset fetch
    let service = CountryService::new(config.endpoint()).context("Failed to start data service")?;
    let fetch = service.spawn_fetch();

    // 4. Terminal
    let mut terminal = init_terminal()?;

    // 5. Main loop
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, fetch);

    // 6. Restore the terminal whatever happened
    restore_terminal(&mut terminal)?;

    tracing::info!("Country explorer exited");
    result
}
