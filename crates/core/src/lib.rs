//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the well: the grid, the shape catalog,
//! placement and collision, line clearing and scoring. It has **zero
//! dependencies** on terminals, timing or I/O; the engine crate drives it.
//!
//! # Module Structure
//!
//! - [`board`]: 22x16 grid with bounds-checked cell access
//! - [`pieces`]: shape table for the 7 kinds x 4 rotations
//! - [`placement`]: the `fits` gate, `fix`, and the active piece
//! - [`lines`]: full-row detection, row removal, per-lock score delta
//! - [`scoring`]: score table, level progression, gravity speed, score record
//! - [`rng`]: uniform piece selection with a one-piece preview
//!
//! # Rules
//!
//! - Pieces spawn at row 0, column 7, rotation 0; a blocked spawn ends the game
//! - Column 0 is a wall; pieces live in columns 1-15
//! - Rotation steps clockwise through the table with no wall kicks
//! - After a lock the 4 rows starting at the anchor row are checked for clears
//! - 1/2/3/4 rows are worth 10/25/40/60 points
//! - Every 3 cleared lines raise the level; the speed table has 10 entries
//!
//! # Example
//!
//! ```
//! use tui_well_core::{fits, resolve_lines, ActivePiece, Board};
//! use tui_well_core::types::PieceKind;
//!
//! let mut board = Board::new();
//! let mut piece = ActivePiece::spawn(PieceKind::O);
//!
//! // Let gravity do its thing until the piece can't descend.
//! while piece.shifted(1, 0).fits(&board) {
//!     piece = piece.shifted(1, 0);
//! }
//! piece.fix(&mut board);
//!
//! assert!(board.is_occupied(21, 8));
//! assert!(!fits(&board, piece.kind, piece.rotation, piece.anchor()));
//! assert_eq!(resolve_lines(&mut board, piece.row as usize).points, 0);
//! ```

pub mod board;
pub mod lines;
pub mod pieces;
pub mod placement;
pub mod rng;
pub mod scoring;

pub use tui_well_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use lines::{clear_row, resolve_lines, row_is_full, LineClear};
pub use pieces::{get_shape, get_spawn_shape, shape_at, SPAWN_ANCHOR};
pub use placement::{fits, fix, ActivePiece};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{calculate_level, gravity_interval, line_clear_points, ScoreRecord};
