//! Internal setters used by undo operations
//!
//! These bypass the undo system. Out of range glyph indices are ignored.

use super::PsfEditState;

impl PsfEditState {
    pub(crate) fn set_pixel_internal(&mut self, glyph: usize, x: usize, y: usize, value: bool) {
        let (width, height) = self.font_size();
        if x >= width || y >= height {
            return;
        }
        self.font.set_pixel(glyph, x, y, value);
    }

    pub(crate) fn set_glyph_data_internal(&mut self, glyph: usize, data: Vec<u8>) {
        if let Some(g) = self.font.glyph_mut(glyph) {
            g.data = data;
        }
    }

    /// Clear the live pixels of a glyph, row padding is kept
    pub(crate) fn clear_glyph_internal(&mut self, glyph: usize) {
        self.map_pixels_internal(glyph, |_| false);
    }

    /// Toggle the live pixels of a glyph, row padding is kept
    pub(crate) fn inverse_glyph_internal(&mut self, glyph: usize) {
        self.map_pixels_internal(glyph, |pixel| !pixel);
    }

    fn map_pixels_internal(&mut self, glyph: usize, f: impl Fn(bool) -> bool) {
        let (width, height) = self.font_size();
        let Some(g) = self.font.glyph_mut(glyph) else {
            return;
        };
        for y in 0..height {
            for x in 0..width {
                let value = f(g.get_pixel(width, x, y));
                g.set_pixel(width, x, y, value);
            }
        }
    }
}
