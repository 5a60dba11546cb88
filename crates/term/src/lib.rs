//! Terminal renderer for the well.
//!
//! This is a small, game-oriented rendering layer. It avoids widget toolkits
//! and instead draws into a plain framebuffer that is diff-flushed to the
//! terminal through crossterm.
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`terminal`]: raw-mode setup and the diff flusher
//! - [`view`]: [`WellView`], the engine's [`Renderer`](crate::engine::Renderer)

pub mod fb;
pub mod terminal;
pub mod view;

pub use tui_well_core as core;
pub use tui_well_engine as engine;
pub use tui_well_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use terminal::{encode_diff_into, encode_full_into, Terminal};
pub use view::{cell_origin, piece_color, WellView, SCREEN_H, SCREEN_W};
