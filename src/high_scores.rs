//! High-score table persisted as JSON.
//!
//! The table keeps the best [`MAX_ENTRIES`] games, highest points first. A
//! missing file is an empty table; a file that exists but cannot be parsed is
//! an error, so a corrupt table is never silently overwritten.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::ScoreRecord;

/// Entries kept in the table.
pub const MAX_ENTRIES: usize = 10;

/// File name used when no path is given on the command line.
pub const DEFAULT_FILE_NAME: &str = "tui-well-scores.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub name: String,
    #[serde(flatten)]
    pub record: ScoreRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreTable {
    entries: Vec<HighScore>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from `path`; a missing file gives an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("read high scores from {}", path.display()))
            }
        };

        let mut table: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse high scores in {}", path.display()))?;
        table.normalize();
        Ok(table)
    }

    /// Write the table to `path`, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize high scores")?;
        fs::write(path, json).with_context(|| format!("write high scores to {}", path.display()))
    }

    /// Add a finished game.
    ///
    /// Returns the 0-based rank it landed on, or `None` if it did not make the
    /// table. Ties keep the older entry first.
    pub fn insert(&mut self, name: impl Into<String>, record: ScoreRecord) -> Option<usize> {
        let rank = self
            .entries
            .iter()
            .position(|e| e.record.points < record.points)
            .unwrap_or(self.entries.len());
        if rank >= MAX_ENTRIES {
            return None;
        }

        self.entries.insert(
            rank,
            HighScore {
                name: name.into(),
                record,
            },
        );
        self.entries.truncate(MAX_ENTRIES);
        Some(rank)
    }

    /// Whether a game with `points` would make the table.
    pub fn qualifies(&self, points: u32) -> bool {
        self.entries.len() < MAX_ENTRIES || self.entries.iter().any(|e| e.record.points < points)
    }

    pub fn entries(&self) -> &[HighScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Restore ordering and size after loading a hand-edited file.
    fn normalize(&mut self) {
        // Stable sort keeps file order among equal scores.
        self.entries.sort_by(|a, b| b.record.points.cmp(&a.record.points));
        self.entries.truncate(MAX_ENTRIES);
    }
}
