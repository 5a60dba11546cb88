//! Pieces module - tetromino shape catalog
//!
//! Every kind has four rotation states. Each state lists four (row, col)
//! offsets relative to the piece anchor, within a 4x4 box whose top-left corner
//! is the anchor. Rotation is a plain table step: there are no wall kicks.

use crate::types::{PieceKind, Rotation, SPAWN_COL, SPAWN_ROW};

/// Offset of a single mino relative to the piece anchor, as (row, col)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Anchor for new pieces (row, col)
pub const SPAWN_ANCHOR: (i8, i8) = (SPAWN_ROW, SPAWN_COL);

/// Shape table indexed by [kind][rotation]
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 1), (1, 1), (2, 1), (3, 1)],
    ],
    // O
    [
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
    ],
    // J: XXX over ..X
    [
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
    ],
    // L: XXX over X..
    [
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
    ],
    // Z
    [
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (2, 0), (0, 1), (1, 1)],
    ],
    // S
    [
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
    ],
    // T: XXX over .X.
    [
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Get the shape for a raw rotation index; the index wraps modulo 4
pub fn shape_at(kind: PieceKind, rotation_index: usize) -> PieceShape {
    get_shape(kind, Rotation::from_index(rotation_index))
}

/// Get initial shape for a new piece at the spawn anchor
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::North)
}
