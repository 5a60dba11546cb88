//! Scoring module - line-clear points, level progression and gravity speed
//!
//! Scoring is deliberately flat: a lock that clears N rows is worth a fixed
//! number of points regardless of level, and every third cleared line raises
//! the level by one up to the end of the speed table.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::lines::LineClear;
use crate::types::{LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL, SPEED_TABLE_US};

/// Points for clearing `lines` rows in one lock; 0 outside 1-4
pub fn line_clear_points(lines: u32) -> u32 {
    LINE_SCORES.get(lines as usize).copied().unwrap_or(0)
}

/// Clamp a level index into the speed table
pub fn clamp_level(level: u32) -> u32 {
    level.min(MAX_LEVEL)
}

/// Level reached after `total_lines` cleared lines
///
/// Never below the starting level, never above the last speed table entry.
pub fn calculate_level(total_lines: u32, start_level: u32) -> u32 {
    clamp_level((total_lines / LINES_PER_LEVEL).max(start_level))
}

/// Gravity interval for a level; levels past the table reuse the fastest entry
pub fn gravity_interval(level: u32) -> Duration {
    Duration::from_micros(SPEED_TABLE_US[clamp_level(level) as usize])
}

/// Accumulated result of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub points: u32,
    pub lines: u32,
    pub level: u32,
    /// Level the game started at; the level never drops below it
    #[serde(default)]
    pub start_level: u32,
}

impl ScoreRecord {
    /// Fresh record for a game starting at `start_level` (clamped)
    pub fn new(start_level: u32) -> Self {
        let start_level = clamp_level(start_level);
        Self {
            points: 0,
            lines: 0,
            level: start_level,
            start_level,
        }
    }

    /// Fold one lock's line clear into the record and recompute the level
    pub fn apply(&mut self, clear: &LineClear) {
        self.points = self.points.saturating_add(clear.points);
        self.lines = self.lines.saturating_add(clear.lines);
        self.level = calculate_level(self.lines, self.start_level);
    }

    /// Gravity interval for the record's current level
    pub fn gravity_interval(&self) -> Duration {
        gravity_interval(self.level)
    }
}
