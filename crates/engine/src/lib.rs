//! Engine - the real-time drop loop and the game session
//!
//! This crate turns the pure rules of `tui-well-core` into a playable game.
//! It talks to the outside world only through two traits:
//!
//! - [`InputSource`]: blocks for at most a timeout and yields an [`InputEvent`]
//! - [`Renderer`]: receives cell draws, board redraws and panel updates
//!
//! Everything runs on one thread. The wait inside [`drop_piece`] is the only
//! blocking point; each wait ends in exactly one tick, driven either by the
//! event that arrived or by gravity.
//!
//! # Example
//!
//! ```
//! use tui_well_engine::{play_game, NullRenderer, ScriptedInput};
//!
//! // No input at all: every piece falls straight down until the well tops out.
//! let mut input = ScriptedInput::default();
//! let record = play_game(0, 1, &mut input, &mut NullRenderer).unwrap();
//! assert_eq!(record.points, 0);
//! ```
//!
//! [`InputEvent`]: crate::types::InputEvent

pub mod drop;
pub mod input;
pub mod render;
pub mod session;

#[cfg(test)]
mod testing;

pub use tui_well_core as core;
pub use tui_well_types as types;

pub use drop::{drop_piece, Deadline, DropController, DropOutcome, DropState};
pub use input::{InputSource, ScriptedInput};
pub use render::{draw_piece, erase_piece, NullRenderer, Renderer};
pub use session::{play_game, Session};
