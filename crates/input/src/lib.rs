//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::InputEvent`] and implements the engine's
//! [`InputSource`](crate::engine::InputSource) on top of the terminal.

pub mod map;
pub mod terminal;

pub use tui_well_engine as engine;
pub use tui_well_types as types;

pub use map::{handle_key_event, should_quit};
pub use terminal::TerminalInput;
