//! Linear undo/redo history of whole-state snapshots.

/// Two stacks of snapshots. Depth is unbounded.
#[derive(Clone, Debug)]
pub struct History<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state as it was before a mutation. Clears the redo stack.
    pub fn record(&mut self, before: T) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Step back: `current` goes onto the redo stack and the most recent
    /// snapshot is returned. `None` (and no change) when there is nothing to undo.
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward; mirror of [`History::undo`].
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn undo_and_redo_swap_states() {
        let mut history = History::new();
        history.record(1);
        history.record(2);
        // current state is 3
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), Some(1));
        assert_eq!(history.undo(1), None);
        assert_eq!(history.redo(1), Some(2));
        assert_eq!(history.redo(2), Some(3));
        assert_eq!(history.redo(3), None);
    }

    #[test]
    fn record_clears_redo() {
        let mut history = History::new();
        history.record("a");
        assert_eq!(history.undo("b"), Some("a"));
        assert!(history.can_redo());
        history.record("a");
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn empty_history_is_a_no_op() {
        let mut history: History<u8> = History::new();
        assert_eq!(history.undo(0), None);
        assert_eq!(history.redo(0), None);
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
