//! Test doubles shared by the engine's unit tests.

use std::convert::Infallible;

use crate::core::{Board, ScoreRecord};
use crate::render::Renderer;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Mirrors every draw into a grid so tests can inspect what is on screen.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    grid: Vec<Cell>,
    pub draw_calls: usize,
    pub redraws: usize,
    pub paused: bool,
    pub next: Option<PieceKind>,
    pub score: Option<ScoreRecord>,
    pub game_over: Option<ScoreRecord>,
}

impl RecordingRenderer {
    fn slot(&mut self, row: i8, col: i8) -> &mut Cell {
        if self.grid.is_empty() {
            self.grid = vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize];
        }
        assert!(
            (0..BOARD_HEIGHT as i8).contains(&row) && (0..BOARD_WIDTH as i8).contains(&col),
            "draw outside the well: ({row}, {col})"
        );
        &mut self.grid[row as usize * BOARD_WIDTH as usize + col as usize]
    }

    pub fn cell(&self, row: i8, col: i8) -> Cell {
        self.grid
            .get(row as usize * BOARD_WIDTH as usize + col as usize)
            .copied()
            .flatten()
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_some()).count()
    }
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn draw_cell(&mut self, row: i8, col: i8, cell: Cell) -> Result<(), Infallible> {
        self.draw_calls += 1;
        *self.slot(row, col) = cell;
        Ok(())
    }

    fn redraw_board(&mut self, board: &Board) -> Result<(), Infallible> {
        self.redraws += 1;
        self.grid = board.cells().to_vec();
        Ok(())
    }

    fn show_score(&mut self, record: &ScoreRecord) -> Result<(), Infallible> {
        self.score = Some(*record);
        Ok(())
    }

    fn show_next_piece(&mut self, kind: PieceKind) -> Result<(), Infallible> {
        self.next = Some(kind);
        Ok(())
    }

    fn show_game_over(&mut self, record: &ScoreRecord) -> Result<(), Infallible> {
        self.game_over = Some(*record);
        Ok(())
    }

    fn show_paused(&mut self, paused: bool) -> Result<(), Infallible> {
        self.paused = paused;
        Ok(())
    }
}
