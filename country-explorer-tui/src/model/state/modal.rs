//! Modal state

use crate::model::domain::CountryDetail;

/// Modal kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Country detail
    Detail(Box<CountryDetail>),
    /// Key bindings
    Help,
}

/// Modal state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Currently open modal
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// Whether the open modal is a country detail.
    pub fn is_detail(&self) -> bool {
        matches!(self.active, Some(Modal::Detail(_)))
    }
}
