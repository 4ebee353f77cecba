//! Undo/Redo system
//!
//! All modifications go through the undo system:
//! - Single operations push one item to the undo stack
//! - A paint stroke is grouped with `begin_atomic_undo()`/`end_atomic_undo()`
//! - Atomic groups are undone/redone as a single unit
//! - Undo/redo during a paint stroke finishes the stroke first

use crate::bitfont::{PsfUndoOp, PsfUndoStack, PsfUndoState};
use crate::Result;

use super::PsfEditState;

impl PsfEditState {
    /// Begin an atomic undo group, returns the base count to pass to `end_atomic_undo`
    pub fn begin_atomic_undo(&self) -> usize {
        self.undo_stack.undo_len()
    }

    /// End an atomic undo group
    pub fn end_atomic_undo(&mut self, base_count: usize, description: impl Into<String>) {
        if base_count >= self.undo_stack.undo_len() {
            return;
        }
        let operations = self.undo_stack.drain_from(base_count);
        self.undo_stack.create_atomic(description.into(), operations);
    }

    /// Push an undo operation and execute it (redo)
    pub(crate) fn push_undo_action(&mut self, op: PsfUndoOp) -> Result<()> {
        op.redo(self)?;
        if op.changes_data() {
            self.is_dirty = true;
        }
        self.undo_stack.push(op);
        Ok(())
    }

    /// Get undo stack length
    pub fn undo_stack_len(&self) -> usize {
        self.undo_stack.undo_len()
    }

    /// Get redo stack length
    pub fn redo_stack_len(&self) -> usize {
        self.undo_stack.redo_len()
    }

    pub fn undo_stack(&self) -> &PsfUndoStack {
        &self.undo_stack
    }
}

impl PsfUndoState for PsfEditState {
    fn undo_description(&self) -> Option<String> {
        self.undo_stack.undo_description()
    }

    fn can_undo(&self) -> bool {
        self.undo_stack.can_undo()
    }

    fn undo(&mut self) -> Result<()> {
        self.pointer_up();
        let Some(op) = self.undo_stack.pop_undo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        let result = op.undo(self);
        self.undo_stack.push_redo(op);
        result
    }

    fn redo_description(&self) -> Option<String> {
        self.undo_stack.redo_description()
    }

    fn can_redo(&self) -> bool {
        self.undo_stack.can_redo()
    }

    fn redo(&mut self) -> Result<()> {
        self.pointer_up();
        let Some(op) = self.undo_stack.pop_redo() else {
            return Ok(());
        };

        if op.changes_data() {
            self.is_dirty = true;
        }

        let result = op.redo(self);
        self.undo_stack.push_redone(op);
        result
    }
}
