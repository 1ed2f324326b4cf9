//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps them into [`crate::types::GameAction`]s for
//! the screen that is currently shown.

pub mod map;

pub use bug_hunt_types as types;

pub use map::{handle_key_event, should_quit};
