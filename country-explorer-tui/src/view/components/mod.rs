//! Reusable widgets

pub mod modal;
pub mod pagination;
pub mod search_bar;
pub mod statusbar;
