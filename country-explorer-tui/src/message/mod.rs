//! Message layer: event messages
//!
//! The bridge between Event and Update. Every user action and every
//! background result is expressed as a message; Update turns messages into
//! state changes.
//!
//! ```text
//! AppMessage
//! ├── Quit / ShowHelp / ClearStatus / Noop
//! ├── Fetch(FetchOutcome)     dataset fetch finished
//! ├── Table(TableMessage)     cursor, paging, sorting, row activation
//! ├── Search(SearchMessage)   search mode and query editing
//! └── Modal(ModalMessage)     closing the open modal
//! ```

mod app;
mod modal;
mod search;
mod table;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
pub use table::TableMessage;
