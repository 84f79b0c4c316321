//! Search messages

/// Messages for the search bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// Start typing into the search bar
    Enter,
    /// Stop typing (the query is kept)
    Leave,
    /// Append a character
    Input(char),
    /// Delete the last character
    Backspace,
    /// Empty the query
    Clear,
}
