//! PSF font editing module
//!
//! Provides the model layer for bitmap font editing:
//! - `PsfEditState` - owns the active font and mediates all edits
//! - Pointer painting (`PaintState`, `map_pointer`)
//! - Undo/redo operations for all font editing actions
//!
//! UI code only reads from the state and calls its methods.

mod edit_state;
mod undo_operation;
mod undo_stack;

pub use edit_state::*;
pub use undo_operation::PsfUndoOp;
pub use undo_stack::{PsfUndoStack, PsfUndoState};
