//! Pointer driven painting in the enlarged glyph editor.
//!
//! Pressing the primary button paints ink, the secondary button paints background.
//! Dragging keeps painting with the value chosen at press time until the button is
//! released. Everything painted between press and release is one undo step.

use crate::Result;

use super::PsfEditState;

/// Painting mode of the glyph editor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaintState {
    #[default]
    Idle,
    PaintingInk,
    PaintingBackground,
}

impl PaintState {
    /// Pixel value written while in this state
    pub fn value(self) -> Option<bool> {
        match self {
            PaintState::Idle => None,
            PaintState::PaintingInk => Some(true),
            PaintState::PaintingBackground => Some(false),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Map a position in a view magnified by `scale` to a glyph pixel.
///
/// Returns `None` for positions outside the `width` × `height` glyph.
pub fn map_pointer(px: f32, py: f32, scale: usize, width: usize, height: usize) -> Option<(usize, usize)> {
    if scale == 0 || !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
        return None;
    }
    let x = (px / scale as f32).floor() as usize;
    let y = (py / scale as f32).floor() as usize;
    if x >= width || y >= height {
        return None;
    }
    Some((x, y))
}

impl PsfEditState {
    /// Start a stroke on the selected glyph at editor view position `(px, py)`
    pub fn pointer_down(&mut self, button: PointerButton, px: f32, py: f32) -> Result<()> {
        if self.paint_state != PaintState::Idle {
            self.pointer_up();
        }
        self.paint_state = match button {
            PointerButton::Primary => PaintState::PaintingInk,
            PointerButton::Secondary => PaintState::PaintingBackground,
            PointerButton::Middle => return Ok(()),
        };
        self.stroke_base = Some(self.begin_atomic_undo());
        self.paint_at(px, py)
    }

    /// Continue the current stroke, does nothing while idle
    pub fn pointer_move(&mut self, px: f32, py: f32) -> Result<()> {
        if self.paint_state == PaintState::Idle {
            return Ok(());
        }
        self.paint_at(px, py)
    }

    /// Finish the current stroke
    pub fn pointer_up(&mut self) {
        let description = match self.paint_state {
            PaintState::Idle => return,
            PaintState::PaintingInk => "Paint pixels",
            PaintState::PaintingBackground => "Erase pixels",
        };
        self.paint_state = PaintState::Idle;
        if let Some(base) = self.stroke_base.take() {
            self.end_atomic_undo(base, description);
        }
    }

    fn paint_at(&mut self, px: f32, py: f32) -> Result<()> {
        let Some(value) = self.paint_state.value() else {
            return Ok(());
        };
        let (width, height) = self.font_size();
        match map_pointer(px, py, self.options.editor_scale, width, height) {
            Some((x, y)) => self.set_pixel(self.selected_glyph, x, y, value),
            None => Ok(()),
        }
    }
}
