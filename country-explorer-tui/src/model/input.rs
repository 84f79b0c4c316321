//! Input mode

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys are commands
    #[default]
    Normal,
    /// Keys edit the search query
    Search,
}

impl InputMode {
    pub fn is_search(self) -> bool {
        matches!(self, InputMode::Search)
    }
}
