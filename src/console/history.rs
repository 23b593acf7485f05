//! Command history with a navigation cursor
//!
//! The log is append-only up to a capacity bound (oldest entries evicted
//! past it). The navigation index lives in `[0, len]`; `index == len` is
//! the sentinel meaning "no historical entry selected, editing a fresh
//! command". Out-of-range navigation is clamped silently, never surfaced.

use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 1000;

/// Result of one navigation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    /// A historical entry was selected; replace the editable region with it.
    Entry(String),
    /// Navigation moved past the newest entry; clear the editable region.
    Cleared,
    /// The index was already at its bound; leave the editable region alone.
    Unchanged,
}

/// Append-only command log plus navigation index.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    max_size: usize,
    index: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(DEFAULT_CAPACITY)),
            max_size: max_size.max(1),
            index: 0,
        }
    }

    /// Append a submitted command and reset the index to the fresh-entry
    /// sentinel. Blank commands are skipped.
    pub fn push(&mut self, command: &str) {
        if command.trim().is_empty() {
            self.index = self.entries.len();
            return;
        }
        self.entries.push_back(command.to_string());
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        self.index = self.entries.len();
    }

    /// Step to the previous (older) entry, with a floor of 0.
    pub fn previous(&mut self) -> HistoryStep {
        if self.entries.is_empty() || self.index == 0 {
            return HistoryStep::Unchanged;
        }
        self.index -= 1;
        HistoryStep::Entry(self.entries[self.index].clone())
    }

    /// Step to the next (newer) entry. Moving past the newest entry pins
    /// the index at the sentinel and clears the editable region exactly
    /// once; further steps are no-ops.
    pub fn next(&mut self) -> HistoryStep {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            HistoryStep::Entry(self.entries[self.index].clone())
        } else if self.index < self.entries.len() {
            self.index = self.entries.len();
            HistoryStep::Cleared
        } else {
            HistoryStep::Unchanged
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current navigation index, always in `[0, len]`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Entry by position, 0 = oldest.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}
