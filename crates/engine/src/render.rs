//! Renderer contract
//!
//! The engine reports every visible state change through [`Renderer`] and keeps
//! no drawing state of its own. Implementations decide colors, layout and when
//! bytes actually reach the screen.

use std::convert::Infallible;

use crate::core::{ActivePiece, Board, ScoreRecord};
use crate::types::{Cell, PieceKind};

/// Drawing surface for the well and its side panels
///
/// Every call may fail with the implementation's own error type; the engine
/// propagates it unchanged and stops the game.
pub trait Renderer {
    type Error;

    /// Draw one well cell with a piece tag, or as empty
    fn draw_cell(&mut self, row: i8, col: i8, cell: Cell) -> Result<(), Self::Error>;

    /// Draw one well cell as empty
    fn erase_cell(&mut self, row: i8, col: i8) -> Result<(), Self::Error> {
        self.draw_cell(row, col, None)
    }

    /// Redraw the whole well from the board
    fn redraw_board(&mut self, board: &Board) -> Result<(), Self::Error>;

    fn show_score(&mut self, record: &ScoreRecord) -> Result<(), Self::Error>;

    /// Show the preview of the piece after the current one
    fn show_next_piece(&mut self, kind: PieceKind) -> Result<(), Self::Error>;

    fn show_game_over(&mut self, record: &ScoreRecord) -> Result<(), Self::Error>;

    fn show_paused(&mut self, _paused: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Make the changes queued so far visible
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Draw the four cells of a piece
pub fn draw_piece<R: Renderer + ?Sized>(renderer: &mut R, piece: &ActivePiece) -> Result<(), R::Error> {
    for (row, col) in piece.cells() {
        renderer.draw_cell(row, col, Some(piece.kind))?;
    }
    Ok(())
}

/// Erase the four cells of a piece
pub fn erase_piece<R: Renderer + ?Sized>(renderer: &mut R, piece: &ActivePiece) -> Result<(), R::Error> {
    for (row, col) in piece.cells() {
        renderer.erase_cell(row, col)?;
    }
    Ok(())
}

/// Renderer that draws nothing, for headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Error = Infallible;

    fn draw_cell(&mut self, _row: i8, _col: i8, _cell: Cell) -> Result<(), Infallible> {
        Ok(())
    }

    fn redraw_board(&mut self, _board: &Board) -> Result<(), Infallible> {
        Ok(())
    }

    fn show_score(&mut self, _record: &ScoreRecord) -> Result<(), Infallible> {
        Ok(())
    }

    fn show_next_piece(&mut self, _kind: PieceKind) -> Result<(), Infallible> {
        Ok(())
    }

    fn show_game_over(&mut self, _record: &ScoreRecord) -> Result<(), Infallible> {
        Ok(())
    }
}
