use crate::types::{Country, PageInfo};

/// Presentation collaborator driven by the
/// [`ViewStateController`](crate::services::ViewStateController).
///
/// The controller never reads anything back from the presenter; it only
/// pushes the result of each render. Implementations own whatever UI state
/// they need (table rows, button state, modal visibility).
pub trait Presenter {
    /// Replace all visible rows with `rows`, in order.
    fn show_rows(&mut self, rows: &[&Country]);

    /// Update the pagination label (`"Page X of Y"`).
    fn set_page_label(&mut self, info: PageInfo);

    /// Enable or disable the previous/next page controls.
    fn set_navigation(&mut self, prev_enabled: bool, next_enabled: bool);

    /// Show the detail view for one record.
    fn show_detail(&mut self, country: &Country);

    /// Hide the detail view.
    fn hide_detail(&mut self);
}
