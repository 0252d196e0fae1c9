//! Undo/Redo history
//!
//! A linear stack of snapshots with a position pointer:
//! - a snapshot of the live state is recorded before every mutation
//! - undo/redo move the pointer and hand back the stored state
//! - recording after an undo discards every redo-able entry
//! - the oldest entries are dropped once `limit` is exceeded

use std::collections::VecDeque;

use crate::constants::{defaults, history};

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    /// Number of entries that precede the live state
    position: usize,
    limit: usize,
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> History<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(defaults::HISTORY_LIMIT)
    }

    /// A history that keeps at most `limit` undo steps (at least one)
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            position: 0,
            limit: limit.max(1),
        }
    }

    /// Record `state` as the state before a mutation.
    pub fn record(&mut self, state: &T) {
        self.entries.truncate(self.position);
        self.entries.push_back(state.clone());
        self.position += 1;

        while self.entries.len() > self.limit {
            self.entries.pop_front();
            self.position -= 1;
        }
    }

    /// Step back one entry. `current` is kept so that redo can return to it.
    pub fn undo(&mut self, current: &T) -> Option<T> {
        if self.position == 0 {
            tracing::debug!("{}", history::ALREADY_OLDEST);
            return None;
        }
        if self.position == self.entries.len() {
            self.entries.push_back(current.clone());
        }
        self.position -= 1;
        self.entries.get(self.position).cloned()
    }

    /// Step forward one entry
    pub fn redo(&mut self) -> Option<T> {
        if self.position + 1 >= self.entries.len() {
            tracing::debug!("{}", history::ALREADY_NEWEST);
            return None;
        }
        self.position += 1;
        self.entries.get(self.position).cloned()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of undo steps available
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.position
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }
}
