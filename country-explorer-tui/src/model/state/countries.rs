//! Country table state

use country_explorer_core::types::{Country, PageInfo};
use country_explorer_core::Presenter;

use super::{Modal, ModalState};
use crate::model::domain::{CountryDetail, CountryRow};

/// Dataset load progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed; the table stays empty
    Unavailable,
}

/// Country table state
///
/// Written only through [`Presenter`]; the row cursor and modals are the
/// only parts the update layer touches directly.
#[derive(Debug, Default)]
pub struct CountriesState {
    /// Rows of the current page
    pub rows: Vec<CountryRow>,
    /// Cursor position within `rows`
    pub selected: usize,
    /// Pagination summary of the last render
    pub page: PageInfo,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// Detail and help modals
    pub modal: ModalState,
}

impl CountriesState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected < self.rows.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    /// Row under the cursor
    pub fn selected_row(&self) -> Option<&CountryRow> {
        self.rows.get(self.selected)
    }
}

impl Presenter for CountriesState {
    fn show_rows(&mut self, rows: &[&Country]) {
        let unchanged = self.rows.len() == rows.len()
            && self.rows.iter().zip(rows).all(|(row, c)| row.id() == c.id());
        if !unchanged {
            self.rows = rows.iter().map(|country| CountryRow::from(*country)).collect();
            // The cursor points at a row, not at a position.
            self.selected = 0;
        }
    }

    fn set_page_label(&mut self, info: PageInfo) {
        self.page = info;
    }

    fn set_navigation(&mut self, prev_enabled: bool, next_enabled: bool) {
        self.prev_enabled = prev_enabled;
        self.next_enabled = next_enabled;
    }

    fn show_detail(&mut self, country: &Country) {
        self.modal
            .show(Modal::Detail(Box::new(CountryDetail::from(country))));
    }

    fn hide_detail(&mut self) {
        if self.modal.is_detail() {
            self.modal.close();
        }
    }
}
