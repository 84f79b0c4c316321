//! View state controller
//!
//! Owns the dataset and the three pieces of view state (sort direction,
//! search query, current page). Every user action goes through one of the
//! `on_*` methods, which mutate state and re-run the whole
//! sort → filter → paginate pipeline before pushing the result to the
//! [`Presenter`]. Page moves that would leave the valid range are no-ops.

use std::sync::Arc;

use crate::pipeline::{
    filter_countries, matches_query, paginate, sort_countries, total_pages, PAGE_SIZE,
};
use crate::traits::Presenter;
use crate::types::{Country, PageInfo, SortDirection};

/// The only stateful component of the explorer.
///
/// Invariant: after every render, `1 <= current_page <= total_pages`.
/// The controller never fails; operations that cannot apply (dataset not
/// loaded yet, unknown row) are logged no-ops.
pub struct ViewStateController<P: Presenter> {
    presenter: P,
    dataset: Option<Arc<[Country]>>,
    sort_direction: SortDirection,
    search_query: String,
    current_page: usize,
}

impl<P: Presenter> ViewStateController<P> {
    /// Create a controller with default view state and no dataset.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            dataset: None,
            sort_direction: SortDirection::default(),
            search_query: String::new(),
            current_page: 1,
        }
    }

    // ============ Dataset ============

    /// Install the dataset and render it.
    ///
    /// The dataset is set once per session; later calls are ignored.
    pub fn set_dataset(&mut self, countries: Vec<Country>) {
        if self.dataset.is_some() {
            log::warn!("Dataset already loaded, ignoring {} records", countries.len());
            return;
        }
        log::debug!("Dataset installed: {} records", countries.len());
        self.dataset = Some(countries.into());
        self.render();
    }

    /// Whether the dataset has been installed.
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    // ============ Render ============

    /// Recompute the visible page and push it to the presenter.
    ///
    /// Does nothing before the dataset is loaded.
    pub fn render(&mut self) {
        let Some(dataset) = self.dataset.as_deref() else {
            log::debug!("Render skipped: dataset not loaded");
            return;
        };

        let sorted = sort_countries(dataset, self.sort_direction);
        let filtered = filter_countries(sorted, &self.search_query);
        let total = total_pages(filtered.len(), PAGE_SIZE);
        self.current_page = self.current_page.clamp(1, total);

        let info = PageInfo::new(self.current_page, total, filtered.len());
        let rows = paginate(&filtered, self.current_page, PAGE_SIZE);

        self.presenter.show_rows(rows);
        self.presenter.set_page_label(info);
        self.presenter
            .set_navigation(info.has_previous(), info.has_next());
    }

    // ============ User Actions ============

    /// Search text changed: apply it and go back to the first page.
    pub fn on_search_changed(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        self.render();
    }

    /// Sort direction changed.
    ///
    /// The current page is kept; `render` clamps it if needed.
    pub fn on_sort_changed(&mut self, direction: SortDirection) {
        log::debug!("Sort direction: {direction}");
        self.sort_direction = direction;
        self.render();
    }

    /// Flip the sort direction.
    pub fn toggle_sort(&mut self) {
        self.on_sort_changed(self.sort_direction.toggled());
    }

    /// Clear the search and go back to the first page.
    pub fn on_clear(&mut self) {
        self.search_query.clear();
        self.current_page = 1;
        self.render();
    }

    /// Go to the previous page, if there is one.
    ///
    /// Renders only when the page actually moves.
    pub fn on_prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
            self.render();
        }
    }

    /// Go to the next page, if there is one.
    ///
    /// Renders only when the page actually moves.
    pub fn on_next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            self.render();
        }
    }

    /// Show the detail of the first record whose official name is `id`.
    ///
    /// Returns whether a record was found.
    pub fn on_row_activated(&mut self, id: &str) -> bool {
        let Some(dataset) = self.dataset.as_deref() else {
            log::debug!("Row activated before dataset load: {id}");
            return false;
        };
        match dataset.iter().find(|c| c.id() == id) {
            Some(country) => {
                self.presenter.show_detail(country);
                true
            }
            None => {
                log::warn!("Row activated for unknown country: {id}");
                false
            }
        }
    }

    /// Detail view dismissed.
    pub fn on_detail_dismissed(&mut self) {
        self.presenter.hide_detail();
    }

    // ============ Accessors ============

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page count for the current search, computed without rendering.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), PAGE_SIZE)
    }

    /// Pagination summary for the current state.
    pub fn page_info(&self) -> PageInfo {
        let items = self.filtered_len();
        PageInfo::new(self.current_page, total_pages(items, PAGE_SIZE), items)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn filtered_len(&self) -> usize {
        self.dataset.as_deref().map_or(0, |dataset| {
            dataset
                .iter()
                .filter(|c| matches_query(c, &self.search_query))
                .count()
        })
    }
}
