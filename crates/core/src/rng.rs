//! RNG module - uniform piece selection with a one-piece preview
//!
//! Every piece is drawn independently and uniformly from the seven kinds.
//! The queue always holds the upcoming piece so the preview can be shown while
//! the current one is still falling.
//!
//! Uses a simple LCG so games are reproducible from a seed in tests.

use crate::types::{PieceKind, PIECE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// The low bits of an LCG cycle with short periods, so only the high half is used.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Piece source: the upcoming piece plus the RNG that picks the one after it
#[derive(Debug, Clone)]
pub struct PieceQueue {
    next: PieceKind,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::pick(&mut rng);
        Self { next, rng }
    }

    fn pick(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::from_index(rng.next_range(PIECE_COUNT as u32) as usize)
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the upcoming piece and choose a fresh one behind it
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.next;
        self.next = Self::pick(&mut self.rng);
        piece
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
