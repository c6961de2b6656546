//! Linear undo/redo log.

use super::record::MoveRecord;

/// Two-stack history: undo entries and redo entries, both LIFO.
///
/// Recording a new transition clears the redo log; redo is only possible
/// right after undo with nothing recorded in between.
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    undo_log: Vec<MoveRecord>,
    redo_log: Vec<MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh forward transition.
    pub fn record(&mut self, entry: MoveRecord) {
        self.redo_log.clear();
        self.undo_log.push(entry);
    }

    /// Take the most recent entry for undoing.
    pub fn pop_undo(&mut self) -> Option<MoveRecord> {
        self.undo_log.pop()
    }

    /// Take the most recently undone entry for redoing.
    pub fn pop_redo(&mut self) -> Option<MoveRecord> {
        self.redo_log.pop()
    }

    /// Park an undone entry on the redo log.
    pub fn push_redo(&mut self, entry: MoveRecord) {
        self.redo_log.push(entry);
    }

    /// Put a redone entry back on the undo log without touching redo.
    pub fn push_undo(&mut self, entry: MoveRecord) {
        self.undo_log.push(entry);
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_log.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_log.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_log.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_log.len()
    }

    pub fn clear(&mut self) {
        self.undo_log.clear();
        self.redo_log.clear();
    }
}
