//! Table messages

use country_explorer_core::SortDirection;

/// Messages for the country table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMessage {
    /// Cursor up
    SelectPrevious,
    /// Cursor down
    SelectNext,
    /// Cursor to the first row
    SelectFirst,
    /// Cursor to the last row
    SelectLast,
    /// Previous page
    PrevPage,
    /// Next page
    NextPage,
    /// Flip the sort direction
    ToggleSort,
    /// Set the sort direction
    Sort(SortDirection),
    /// Open the detail of the row under the cursor
    Activate,
}
