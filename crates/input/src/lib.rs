//! Terminal input module.
//!
//! Maps `crossterm` key events onto slide [`crate::types::Direction`]s. A 2048
//! move is a single discrete step, so there is no key-repeat handling here:
//! one key press is one slide.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
