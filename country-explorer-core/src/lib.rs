//! Country Explorer Core Library
//!
//! The view logic of the country explorer, independent of any UI:
//! - Derivation pipeline (sort, filter, paginate)
//! - View state controller driving a [`Presenter`]
//! - Dataset loader (the fetch boundary)
//!
//! Front ends implement [`Presenter`] and forward user input to the
//! [`ViewStateController`].

pub mod error;
pub mod pipeline;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DatasetLoader, ViewStateController};
pub use traits::Presenter;
pub use types::{Country, PageInfo, SortDirection};
