//! Collaborator trait definitions

mod presenter;

pub use presenter::Presenter;
