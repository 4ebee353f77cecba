//! Undo operations for PSF font editing

use crate::bitfont::PsfEditState;
use crate::Result;

/// Undo operation enum for PSF font editing
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PsfUndoOp {
    /// Atomic group of operations
    Atomic { description: String, operations: Vec<PsfUndoOp> },

    /// Set or clear a single pixel
    SetPixel {
        glyph: usize,
        x: usize,
        y: usize,
        old_value: bool,
        new_value: bool,
    },

    /// Clear glyph (set all pixels to background)
    ClearGlyph { glyph: usize, old_data: Vec<u8> },

    /// Inverse glyph (toggle all pixels)
    InverseGlyph { glyph: usize },
}

impl PsfUndoOp {
    /// Get a description of this operation for display
    pub fn get_description(&self) -> String {
        match self {
            PsfUndoOp::Atomic { description, .. } => description.clone(),
            PsfUndoOp::SetPixel { new_value, .. } => {
                if *new_value {
                    "Set pixel".to_string()
                } else {
                    "Clear pixel".to_string()
                }
            }
            PsfUndoOp::ClearGlyph { .. } => "Clear glyph".to_string(),
            PsfUndoOp::InverseGlyph { .. } => "Inverse glyph".to_string(),
        }
    }

    /// Whether this operation changes data (affects dirty flag)
    pub fn changes_data(&self) -> bool {
        match self {
            PsfUndoOp::Atomic { operations, .. } => operations.iter().any(PsfUndoOp::changes_data),
            PsfUndoOp::SetPixel { old_value, new_value, .. } => old_value != new_value,
            _ => true,
        }
    }

    /// Undo this operation
    pub fn undo(&self, state: &mut PsfEditState) -> Result<()> {
        match self {
            PsfUndoOp::Atomic { operations, .. } => {
                for op in operations.iter().rev() {
                    op.undo(state)?;
                }
                Ok(())
            }

            PsfUndoOp::SetPixel { glyph, x, y, old_value, .. } => {
                state.set_pixel_internal(*glyph, *x, *y, *old_value);
                Ok(())
            }

            PsfUndoOp::ClearGlyph { glyph, old_data } => {
                state.set_glyph_data_internal(*glyph, old_data.clone());
                Ok(())
            }

            // Inverse is self-reversing
            PsfUndoOp::InverseGlyph { glyph } => {
                state.inverse_glyph_internal(*glyph);
                Ok(())
            }
        }
    }

    /// Redo this operation
    pub fn redo(&self, state: &mut PsfEditState) -> Result<()> {
        match self {
            PsfUndoOp::Atomic { operations, .. } => {
                for op in operations {
                    op.redo(state)?;
                }
                Ok(())
            }

            PsfUndoOp::SetPixel { glyph, x, y, new_value, .. } => {
                state.set_pixel_internal(*glyph, *x, *y, *new_value);
                Ok(())
            }

            PsfUndoOp::ClearGlyph { glyph, .. } => {
                state.clear_glyph_internal(*glyph);
                Ok(())
            }

            PsfUndoOp::InverseGlyph { glyph } => {
                state.inverse_glyph_internal(*glyph);
                Ok(())
            }
        }
    }
}
