//! Screen state
//!
//! [`CountriesState`] is the presenter of the core view controller; it holds
//! everything the table page and its modals draw.

mod countries;
mod modal;

pub use countries::{CountriesState, LoadState};
pub use modal::{Modal, ModalState};
