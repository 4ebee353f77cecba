//! Undo stack for PSF font editing
//!
//! Provides traits and types for undo/redo operations on bitmap fonts.

use crate::Result;

use super::PsfUndoOp;

/// Trait for types that support undo/redo operations
pub trait PsfUndoState {
    /// Get description of the next undo operation
    fn undo_description(&self) -> Option<String>;

    /// Check if undo is available
    fn can_undo(&self) -> bool;

    /// Perform undo operation
    fn undo(&mut self) -> Result<()>;

    /// Get description of the next redo operation
    fn redo_description(&self) -> Option<String>;

    /// Check if redo is available
    fn can_redo(&self) -> bool;

    /// Perform redo operation
    fn redo(&mut self) -> Result<()>;
}

/// Undo and redo lists. The most recent operation is at the end of each list.
#[derive(Clone, Debug, Default)]
pub struct PsfUndoStack {
    undo: Vec<PsfUndoOp>,
    redo: Vec<PsfUndoOp>,
}

impl PsfUndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new operation. Invalidates everything that could be redone.
    pub fn push(&mut self, op: PsfUndoOp) {
        self.redo.clear();
        self.undo.push(op);
    }

    pub fn pop_undo(&mut self) -> Option<PsfUndoOp> {
        self.undo.pop()
    }

    pub fn pop_redo(&mut self) -> Option<PsfUndoOp> {
        self.redo.pop()
    }

    /// Put an undone operation on the redo list.
    pub fn push_redo(&mut self, op: PsfUndoOp) {
        self.redo.push(op);
    }

    /// Put a redone operation back on the undo list, keeping the remaining redo list.
    pub fn push_redone(&mut self, op: PsfUndoOp) {
        self.undo.push(op);
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.undo.last().map(PsfUndoOp::get_description)
    }

    pub fn redo_description(&self) -> Option<String> {
        self.redo.last().map(PsfUndoOp::get_description)
    }

    /// Remove all undo operations recorded at or after `base_count`.
    pub fn drain_from(&mut self, base_count: usize) -> Vec<PsfUndoOp> {
        self.undo.drain(base_count.min(self.undo.len())..).collect()
    }

    /// Wrap `operations` into one atomic entry.
    pub fn create_atomic(&mut self, description: String, operations: Vec<PsfUndoOp>) {
        if operations.is_empty() {
            return;
        }
        self.undo.push(PsfUndoOp::Atomic { description, operations });
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
