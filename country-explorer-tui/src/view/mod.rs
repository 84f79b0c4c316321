//! View layer: rendering
//!
//! Reads the [`App`](crate::model::App) and draws it; never mutates state.
//!
//! ```text
//! ┌ title bar ─────────────────────────────────────────────┐
//! │ search bar (query, sort direction)                     │
//! │ country table                                          │
//! │ pagination line (◀ Prev   Page X of Y   Next ▶)        │
//! └ status bar (key hints, status message) ────────────────┘
//!   modal (detail / help) drawn on top
//! ```

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
