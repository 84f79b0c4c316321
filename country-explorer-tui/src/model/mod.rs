//! Model layer: application state
//!
//! The single source of truth of the UI. Update mutates it, view reads it.
//!
//! ```text
//! App
//! ├── should_quit / status_message / load_state / input_mode
//! └── explorer: ViewStateController<CountriesState>
//!                 ├── sort direction, search query, current page
//!                 └── presenter: CountriesState
//!                       ├── rows, selected, page, prev/next enabled
//!                       └── modal: ModalState (Detail | Help)
//! ```

mod app;
mod input;

pub mod domain;
pub mod state;

pub use app::App;
pub use input::InputMode;
pub use state::{CountriesState, LoadState, Modal, ModalState};
