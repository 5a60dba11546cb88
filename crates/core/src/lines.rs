//! Line clearing - full-row detection, row removal and the per-lock score delta

use arrayvec::ArrayVec;

use crate::scoring::line_clear_points;
use crate::types::{BOARD_HEIGHT, FIRST_PLAYABLE_COL, LAST_PLAYABLE_COL};
use crate::Board;

/// Rows a single piece can span; the resolve window after a lock
pub const RESOLVE_WINDOW: usize = 4;

/// Outcome of resolving one lock
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Points awarded for this lock
    pub points: u32,
    /// Number of rows removed
    pub lines: u32,
    /// Row indices that were full, top to bottom
    pub rows: ArrayVec<usize, RESOLVE_WINDOW>,
}

impl LineClear {
    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }
}

/// Check if every playable column of a row is occupied
///
/// The wall column is not part of the check. Out-of-range rows are never full.
pub fn row_is_full(board: &Board, row: usize) -> bool {
    if row >= BOARD_HEIGHT as usize {
        return false;
    }
    (FIRST_PLAYABLE_COL..=LAST_PLAYABLE_COL).all(|col| board.is_occupied(row as i8, col))
}

/// Empty a row and shift every row above it down by one
///
/// Row 0 is empty afterwards.
pub fn clear_row(board: &mut Board, row: usize) {
    if row >= BOARD_HEIGHT as usize {
        return;
    }
    board.clear_row_cells(row);
    for r in (1..=row).rev() {
        board.copy_row(r - 1, r);
    }
    board.clear_row_cells(0);
}

/// Clear the full rows among `[locked_row, locked_row + 4)` and score them
///
/// Rows are scanned top to bottom. Clearing a row only moves rows above it,
/// so the rows still to be scanned keep their indices.
pub fn resolve_lines(board: &mut Board, locked_row: usize) -> LineClear {
    let mut rows = ArrayVec::new();
    let end = (locked_row + RESOLVE_WINDOW).min(BOARD_HEIGHT as usize);

    for row in locked_row..end {
        if row_is_full(board, row) {
            clear_row(board, row);
            rows.push(row);
        }
    }

    let lines = rows.len() as u32;
    LineClear {
        points: line_clear_points(lines),
        lines,
        rows,
    }
}
