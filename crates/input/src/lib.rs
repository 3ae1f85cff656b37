//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides
//! a press-and-hold repeater that also works in terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::{repeat_button, HoldRepeater};
pub use map::{handle_key_event, should_quit};
