//! Input source contract

use std::collections::VecDeque;
use std::time::Duration;

use crate::types::InputEvent;

/// Source of player events
///
/// `poll` blocks for at most `timeout` and returns `None` when nothing usable
/// arrived in that time. Read errors and keys without a meaning are the
/// source's problem: it reports them as `None` or keeps waiting, never as an
/// event.
pub trait InputSource {
    fn poll(&mut self, timeout: Duration) -> Option<InputEvent>;
}

/// Pre-recorded input: each poll returns the next scripted entry immediately
///
/// A `None` entry stands for "the timeout elapsed". Once the script runs out
/// every poll times out, so pieces just fall.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<InputEvent>>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Script of events only, no timeouts in between
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self::new(events.into_iter().map(Some))
    }

    pub fn push(&mut self, entry: Option<InputEvent>) {
        self.script.push_back(entry);
    }

    /// Entries not consumed yet
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration) -> Option<InputEvent> {
        self.script.pop_front().flatten()
    }
}
