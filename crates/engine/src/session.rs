//! Game session - the loop over pieces for one whole game
//!
//! The session owns the board, the score record and the piece queue. It
//! drops pieces one after another, resolves lines after every lock and stops
//! when a spawn is blocked or the player quits.

use crate::core::{resolve_lines, Board, LineClear, PieceQueue, ScoreRecord};
use crate::drop::{drop_piece, DropOutcome};
use crate::input::InputSource;
use crate::render::Renderer;
use crate::types::PieceKind;

/// One game, from empty well to game over
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    record: ScoreRecord,
    queue: PieceQueue,
    pieces_locked: u32,
}

impl Session {
    /// Create a session starting at `start_level` with a piece RNG seed
    pub fn new(start_level: u32, seed: u32) -> Self {
        Self {
            board: Board::new(),
            record: ScoreRecord::new(start_level),
            queue: PieceQueue::new(seed),
            pieces_locked: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up positions before playing pieces
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn record(&self) -> ScoreRecord {
        self.record
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// The piece that will fall next
    pub fn upcoming(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Empty the board, zero the record and show the fresh state
    pub fn reset<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        self.board.reset();
        self.record = ScoreRecord::new(self.record.start_level);
        self.pieces_locked = 0;

        renderer.redraw_board(&self.board)?;
        renderer.show_score(&self.record)?;
        renderer.present()
    }

    /// Play the whole game and return the final record
    pub fn play<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<ScoreRecord, R::Error>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        self.reset(renderer)?;
        while let DropOutcome::Locked { .. } = self.play_piece(input, renderer)? {}

        renderer.show_game_over(&self.record)?;
        renderer.present()?;
        Ok(self.record)
    }

    /// Drop the upcoming piece and fold its line clears into the record
    pub fn play_piece<I, R>(&mut self, input: &mut I, renderer: &mut R) -> Result<DropOutcome, R::Error>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let kind = self.queue.draw();
        renderer.show_next_piece(self.queue.peek())?;

        let outcome = drop_piece(
            &mut self.board,
            kind,
            self.record.gravity_interval(),
            input,
            renderer,
        )?;

        if let DropOutcome::Locked { row } = outcome {
            self.pieces_locked += 1;
            let clear = resolve_lines(&mut self.board, row);
            self.apply_clear(&clear, renderer)?;
        }
        Ok(outcome)
    }

    fn apply_clear<R: Renderer + ?Sized>(&mut self, clear: &LineClear, renderer: &mut R) -> Result<(), R::Error> {
        if clear.is_empty() {
            return Ok(());
        }
        self.record.apply(clear);
        renderer.redraw_board(&self.board)?;
        renderer.show_score(&self.record)?;
        renderer.present()
    }
}

/// Play one game from an empty well
///
/// The first piece is random, every later one was picked (and previewed) a
/// piece in advance. Returns the final score record.
pub fn play_game<I, R>(
    start_level: u32,
    seed: u32,
    input: &mut I,
    renderer: &mut R,
) -> Result<ScoreRecord, R::Error>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    Session::new(start_level, seed).play(input, renderer)
}
