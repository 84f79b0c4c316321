//! Backend layer: configuration and data services
//!
//! Kept apart from the UI layers. Nothing here draws or reads keys.
//!
//! - `config_service`: loads [`AppConfig`] from
//!   `<config_dir>/country-explorer/config.json`
//! - `country_service`: owns the tokio runtime and runs the one dataset
//!   fetch, handing the result back through a [`PendingFetch`]
//!
//! Data flow of the fetch:
//!
//! ```text
//! main ─▶ CountryService::spawn_fetch ─▶ DatasetLoader::load (tokio task)
//!                                               │
//!                                         oneshot channel
//!                                               ▼
//! app.rs loop ─▶ PendingFetch::poll ─▶ AppMessage::Fetch ─▶ update layer
//! ```

mod config_service;
mod country_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use country_service::{CountryService, FetchOutcome, PendingFetch};
