//! Event layer: input handling
//!
//! Turns crossterm events into [`AppMessage`](crate::message::AppMessage)s.
//! Keys are routed by priority:
//!
//! 1. `Ctrl+c` quits from anywhere
//! 2. an open modal takes `Esc`/`Enter`/`q` (close) and swallows the rest
//! 3. search mode takes characters, `Backspace`, `Ctrl+u`, `Esc`/`Enter`
//! 4. otherwise table keys (paging, cursor, sort, search, help, quit)

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
