use std::collections::VecDeque;

use super::Action;

/// Number of actions kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Bounded, linear undo/redo history.
///
/// The cursor points at the most recently applied action; `None` means
/// nothing is applied (empty log, or everything undone). Recording after an
/// undo discards the redo branch, and once the log grows past its limit the
/// oldest entries are dropped for good.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLog {
    actions: VecDeque<Action>,
    cursor: Option<usize>,
    limit: usize,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    /// Creates an empty log holding at most `DEFAULT_HISTORY_LIMIT` actions
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates an empty log holding at most `limit` actions (at least one)
    pub fn with_limit(limit: usize) -> Self {
        Self {
            actions: VecDeque::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Record a newly applied action
    pub fn record(&mut self, action: Action) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        self.actions.truncate(keep);
        self.actions.push_back(action);

        while self.actions.len() > self.limit {
            if let Some(dropped) = self.actions.pop_front() {
                log::trace!("History full, dropping {:?}", dropped.label());
            }
        }

        self.cursor = Some(self.actions.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 < self.actions.len(),
            None => !self.actions.is_empty(),
        }
    }

    /// The action the next undo would revert
    pub fn peek_undo(&self) -> Option<&Action> {
        self.cursor.and_then(|cursor| self.actions.get(cursor))
    }

    /// The action the next redo would re-apply
    pub fn peek_redo(&self) -> Option<&Action> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        self.actions.get(next)
    }

    /// Move the cursor back by one after the caller reverted `peek_undo`
    pub fn step_back(&mut self) {
        self.cursor = match self.cursor {
            Some(0) | None => None,
            Some(cursor) => Some(cursor - 1),
        };
    }

    /// Move the cursor forward by one after the caller re-applied `peek_redo`
    pub fn step_forward(&mut self) {
        if self.can_redo() {
            self.cursor = Some(self.cursor.map_or(0, |cursor| cursor + 1));
        }
    }

    /// Index of the most recently applied action
    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Recorded actions, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Forget every recorded action
    pub fn clear(&mut self) {
        self.actions.clear();
        self.cursor = None;
    }
}
