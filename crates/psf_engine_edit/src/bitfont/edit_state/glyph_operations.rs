//! Glyph-level operations
//!
//! - Pixel editing (set_pixel, toggle_pixel)
//! - Clear glyph
//! - Inverse glyph

use crate::bitfont::PsfUndoOp;
use crate::Result;

use super::PsfEditState;

impl PsfEditState {
    /// Get a pixel value, `false` for positions outside the font
    pub fn get_pixel(&self, glyph: usize, x: usize, y: usize) -> bool {
        let (width, height) = self.font_size();
        if x >= width || y >= height {
            return false;
        }
        self.font.get_pixel(glyph, x, y).unwrap_or(false)
    }

    /// Set a single pixel value
    ///
    /// Positions outside the font are ignored, as are writes that would not change the bit.
    pub fn set_pixel(&mut self, glyph: usize, x: usize, y: usize, value: bool) -> Result<()> {
        if !self.contains(glyph, x, y) {
            return Ok(());
        }
        let old_value = self.get_pixel(glyph, x, y);
        if old_value == value {
            return Ok(());
        }
        let op = PsfUndoOp::SetPixel {
            glyph,
            x,
            y,
            old_value,
            new_value: value,
        };
        self.push_undo_action(op)
    }

    /// Toggle a single pixel (flip its value)
    pub fn toggle_pixel(&mut self, glyph: usize, x: usize, y: usize) -> Result<()> {
        if !self.contains(glyph, x, y) {
            return Ok(());
        }
        let value = !self.get_pixel(glyph, x, y);
        self.set_pixel(glyph, x, y, value)
    }

    /// Clear glyph (set all pixels to background)
    ///
    /// A glyph without ink is left alone and nothing is recorded.
    pub fn clear_glyph(&mut self, glyph: usize) -> Result<()> {
        let Some(old) = self.font.glyph(glyph) else {
            return Ok(());
        };
        if !self.has_ink(glyph) {
            return Ok(());
        }
        let op = PsfUndoOp::ClearGlyph {
            glyph,
            old_data: old.data.clone(),
        };
        self.push_undo_action(op)
    }

    /// Inverse glyph (toggle every pixel)
    pub fn inverse_glyph(&mut self, glyph: usize) -> Result<()> {
        if glyph >= self.glyph_count() {
            return Ok(());
        }
        self.push_undo_action(PsfUndoOp::InverseGlyph { glyph })
    }

    fn has_ink(&self, glyph: usize) -> bool {
        let (width, height) = self.font_size();
        (0..height).any(|y| (0..width).any(|x| self.get_pixel(glyph, x, y)))
    }

    fn contains(&self, glyph: usize, x: usize, y: usize) -> bool {
        let (width, height) = self.font_size();
        glyph < self.glyph_count() && x < width && y < height
    }
}
