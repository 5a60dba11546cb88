//! Drop controller - the life of one falling piece
//!
//! A piece spawns at the top, reacts to player events and gravity, and ends
//! either locked into the board or with the game over.
//!
//! ```text
//!            spawn fits                  cannot descend
//!   spawn ───────────────► Falling ─────────────────────► Locked { row }
//!     │                    │    ▲
//!     │ spawn blocked      │    │ Pause
//!     │                    ▼    │
//!     │                    Paused
//!     │                      │
//!     └──────────────────────┴──── Quit ─────────────────► GameOver
//! ```
//!
//! [`DropController::tick`] handles exactly one tick: either the event that
//! arrived or, when the wait timed out, one gravity step. [`drop_piece`] owns
//! the clock and the single blocking wait.

use std::time::{Duration, Instant};

use crate::core::{ActivePiece, Board};
use crate::input::InputSource;
use crate::render::{draw_piece, erase_piece, Renderer};
use crate::types::{InputEvent, PieceKind};

/// How long one wait lasts while paused; gravity is off so any value works
pub const PAUSED_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropState {
    Falling,
    Paused,
    /// The piece was fixed with its anchor on `row`
    Locked { row: i8 },
    GameOver,
}

/// Result of dropping one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece locked; `row` is its anchor row, where line resolution starts
    Locked { row: usize },
    /// The spawn was blocked or the player quit
    GameOver,
}

/// What the tick loop should do with its gravity deadline after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Keep waiting for whatever is left of the current interval
    Keep,
    /// Start a fresh full interval
    Restart,
}

/// State machine for one falling piece
#[derive(Debug, Clone)]
pub struct DropController {
    piece: ActivePiece,
    state: DropState,
}

impl DropController {
    /// Spawn `kind` at the spawn anchor
    ///
    /// A blocked spawn goes straight to `GameOver` and draws nothing.
    pub fn spawn<R: Renderer + ?Sized>(
        board: &Board,
        kind: PieceKind,
        renderer: &mut R,
    ) -> Result<Self, R::Error> {
        let piece = ActivePiece::spawn(kind);
        if !piece.fits(board) {
            return Ok(Self {
                piece,
                state: DropState::GameOver,
            });
        }

        draw_piece(renderer, &piece)?;
        renderer.present()?;
        Ok(Self {
            piece,
            state: DropState::Falling,
        })
    }

    pub fn state(&self) -> DropState {
        self.state
    }

    pub fn piece(&self) -> ActivePiece {
        self.piece
    }

    /// Whether the piece is done (locked or game over)
    pub fn is_finished(&self) -> bool {
        matches!(self.state, DropState::Locked { .. } | DropState::GameOver)
    }

    /// Handle one tick; `None` means the interval elapsed without input
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        board: &mut Board,
        event: Option<InputEvent>,
        renderer: &mut R,
    ) -> Result<Deadline, R::Error> {
        match self.state {
            DropState::Falling => self.tick_falling(board, event, renderer),
            DropState::Paused => self.tick_paused(event, renderer),
            DropState::Locked { .. } | DropState::GameOver => Ok(Deadline::Keep),
        }
    }

    fn tick_falling<R: Renderer + ?Sized>(
        &mut self,
        board: &mut Board,
        event: Option<InputEvent>,
        renderer: &mut R,
    ) -> Result<Deadline, R::Error> {
        match event {
            None | Some(InputEvent::SoftDrop) => {
                self.gravity(board, renderer)?;
                return Ok(Deadline::Restart);
            }
            Some(InputEvent::MoveLeft) => self.try_replace(self.piece.shifted(0, -1), board, renderer)?,
            Some(InputEvent::MoveRight) => self.try_replace(self.piece.shifted(0, 1), board, renderer)?,
            Some(InputEvent::Rotate) => self.try_replace(self.piece.rotated(), board, renderer)?,
            Some(InputEvent::Pause) => {
                self.state = DropState::Paused;
                renderer.show_paused(true)?;
                renderer.present()?;
            }
            Some(InputEvent::Quit) => self.quit(renderer)?,
        }
        Ok(Deadline::Keep)
    }

    fn tick_paused<R: Renderer + ?Sized>(
        &mut self,
        event: Option<InputEvent>,
        renderer: &mut R,
    ) -> Result<Deadline, R::Error> {
        match event {
            Some(InputEvent::Pause) => {
                self.state = DropState::Falling;
                renderer.show_paused(false)?;
                renderer.present()?;
                Ok(Deadline::Restart)
            }
            Some(InputEvent::Quit) => {
                renderer.show_paused(false)?;
                self.quit(renderer)?;
                Ok(Deadline::Keep)
            }
            _ => Ok(Deadline::Keep),
        }
    }

    /// Move down one row, or fix the piece where it is
    fn gravity<R: Renderer + ?Sized>(&mut self, board: &mut Board, renderer: &mut R) -> Result<(), R::Error> {
        let below = self.piece.shifted(1, 0);
        if below.fits(board) {
            self.replace(below, renderer)
        } else {
            self.piece.fix(board);
            self.state = DropState::Locked { row: self.piece.row };
            Ok(())
        }
    }

    /// Apply a candidate position if the placement rules allow it
    fn try_replace<R: Renderer + ?Sized>(
        &mut self,
        candidate: ActivePiece,
        board: &Board,
        renderer: &mut R,
    ) -> Result<(), R::Error> {
        if candidate.fits(board) {
            self.replace(candidate, renderer)?;
        }
        Ok(())
    }

    fn replace<R: Renderer + ?Sized>(&mut self, next: ActivePiece, renderer: &mut R) -> Result<(), R::Error> {
        erase_piece(renderer, &self.piece)?;
        draw_piece(renderer, &next)?;
        renderer.present()?;
        self.piece = next;
        Ok(())
    }

    fn quit<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<(), R::Error> {
        erase_piece(renderer, &self.piece)?;
        renderer.present()?;
        self.state = DropState::GameOver;
        Ok(())
    }
}

/// Drop one piece of `kind` until it locks or the game ends
///
/// Each loop iteration waits on `input` for whatever remains of the gravity
/// interval, then runs exactly one tick. Only gravity steps (timeouts and soft
/// drops) start a new interval; shifts and rotations leave the deadline alone.
pub fn drop_piece<I, R>(
    board: &mut Board,
    kind: PieceKind,
    interval: Duration,
    input: &mut I,
    renderer: &mut R,
) -> Result<DropOutcome, R::Error>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut controller = DropController::spawn(board, kind, renderer)?;
    let mut deadline = Instant::now() + interval;

    loop {
        let event = match controller.state() {
            DropState::Locked { row } => return Ok(DropOutcome::Locked { row: row as usize }),
            DropState::GameOver => return Ok(DropOutcome::GameOver),
            DropState::Paused => input.poll(PAUSED_POLL_INTERVAL),
            DropState::Falling => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    None
                } else {
                    input.poll(remaining)
                }
            }
        };

        if controller.tick(board, event, renderer)? == Deadline::Restart {
            deadline = Instant::now() + interval;
        }
    }
}
