//! Board module - manages the well grid
//!
//! The board is a 22x16 grid where each cell is empty or holds the kind of the
//! piece that locked there. Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..21 (top to bottom) and col ranges
//! 0..15 (left to right). Column 0 is the left wall; pieces only ever occupy 1..15.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The well - 22 rows x 16 logical columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Get width of the board in logical columns
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied (within bounds and filled)
    ///
    /// Out-of-range positions report as not occupied. Callers that move pieces
    /// go through the placement rules, which reject those positions first.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_none()
    }

    /// Write a piece tag into a cell
    ///
    /// Returns false if out of bounds. Writing outside the grid is a bug in the
    /// caller and trips a debug assertion.
    pub fn set(&mut self, row: i8, col: i8, kind: PieceKind) -> bool {
        self.write(row, col, Some(kind))
    }

    /// Empty a cell
    ///
    /// Same bounds policy as [`Board::set`].
    pub fn clear(&mut self, row: i8, col: i8) -> bool {
        self.write(row, col, None)
    }

    fn write(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        let idx = Self::index(row, col);
        debug_assert!(idx.is_some(), "board write out of bounds: ({row}, {col})");
        match idx {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Borrow one row of cells
    /// Returns None if the row is out of bounds
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = row * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Copy row `src` over row `dst`
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let width = BOARD_WIDTH as usize;
        self.cells
            .copy_within(src * width..(src + 1) * width, dst * width);
    }

    /// Empty every cell of one row
    pub(crate) fn clear_row_cells(&mut self, row: usize) {
        let start = row * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells on the whole board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Empty the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
