//! Application main message

use super::{ModalMessage, SearchMessage, TableMessage};
use crate::backend::FetchOutcome;

/// Application main message
#[derive(Debug)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// The startup fetch finished
    Fetch(FetchOutcome),

    /// Table messages
    Table(TableMessage),

    /// Search messages
    Search(SearchMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Show the help modal
    ShowHelp,

    /// Clear the status message
    ClearStatus,

    /// Nothing to do
    Noop,
}
