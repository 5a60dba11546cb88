//! Placement rules - collision checks and fixing pieces into the board
//!
//! [`fits`] is the only gate for spawning, shifting, rotating and falling.
//! It never touches the board, so callers test a candidate position first and
//! only then commit it.

use crate::pieces::{get_shape, PieceShape, SPAWN_ANCHOR};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, FIRST_PLAYABLE_COL, LAST_PLAYABLE_COL};
use crate::Board;

/// Check whether a piece fits at `anchor` (row, col)
///
/// A mino fails when it lands below the floor, left of column 1, right of the
/// last playable column, or on an occupied cell. The piece fits only if all
/// four minos pass.
pub fn fits(board: &Board, kind: PieceKind, rotation: Rotation, anchor: (i8, i8)) -> bool {
    let (row, col) = anchor;
    get_shape(kind, rotation).iter().all(|&(dr, dc)| {
        let r = row + dr;
        let c = col + dc;
        // Rows above the well are never addressed either.
        (0..BOARD_HEIGHT as i8).contains(&r)
            && (FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL).contains(&c)
            && !board.is_occupied(r, c)
    })
}

/// Write the piece's four cells into the board with its tag
///
/// Callers must have checked [`fits`] for this exact position.
pub fn fix(board: &mut Board, kind: PieceKind, rotation: Rotation, anchor: (i8, i8)) {
    let (row, col) = anchor;
    for &(dr, dc) in get_shape(kind, rotation).iter() {
        board.set(row + dr, col + dc, kind);
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor in rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ANCHOR.0,
            col: SPAWN_ANCHOR.1,
        }
    }

    pub fn anchor(&self) -> (i8, i8) {
        (self.row, self.col)
    }

    /// Get the shape (mino offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (row, col) of each mino
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    /// Same piece moved by (drow, dcol)
    pub fn shifted(&self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// Same piece one rotation step further, at the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Check the placement rules for this exact position
    pub fn fits(&self, board: &Board) -> bool {
        fits(board, self.kind, self.rotation, self.anchor())
    }

    /// Fix this piece into the board
    pub fn fix(&self, board: &mut Board) {
        fix(board, self.kind, self.rotation, self.anchor());
    }
}
