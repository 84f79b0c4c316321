//! Display models
//!
//! Records come straight from the core/provider crates; the TUI only keeps
//! the pre-formatted strings it draws.

mod country;

pub use country::{CountryDetail, CountryRow};
