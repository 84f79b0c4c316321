//! Util layer: terminal setup and teardown
//!
//! `init_terminal` switches to raw mode and the alternate screen;
//! `restore_terminal` undoes both and must run on every exit path. A panic
//! hook restores the terminal too, so a panic message stays readable.

mod terminal;

pub use terminal::{init_terminal, restore_terminal, Term};
