//! Bounded history of recent community actions.

use petal_core::action::Action;
use petal_core::constants::MAX_ACTION_HISTORY;

/// Keeps the most recent actions, oldest first. Pushing past capacity drops
/// the oldest entries.
#[derive(Debug, Clone)]
pub struct ActionHistory {
    actions: Vec<Action>,
    capacity: usize,
}

impl Default for ActionHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_ACTION_HISTORY)
    }
}

impl ActionHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actions: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append an action, returning how many old actions were discarded.
    pub fn push(&mut self, action: Action) -> usize {
        self.actions.push(action);
        let excess = self.actions.len().saturating_sub(self.capacity);
        self.actions.drain(..excess);
        excess
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
