//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], taking into account
//! whether the settings modal currently owns the keyboard.

pub mod map;

pub use cuisenaire_types as types;

pub use map::{handle_key_event, should_quit, InputMode};
