//! PSF Edit State
//!
//! The main state container for font editing. It owns exactly one active font; loading a
//! file or creating a blank font replaces it wholesale.
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters, font replacement
//! - `file_operations.rs` - Open/save through the PSF2 codec
//! - `glyph_operations.rs` - Pixel, clear and inverse operations
//! - `paint.rs` - Pointer driven painting state machine
//! - `undo.rs` - Undo/redo system
//! - `internal.rs` - Internal setters for undo operations

use std::path::{Path, PathBuf};

use psf_engine::{PsfFont, Raster};

use crate::bitfont::PsfUndoStack;
use crate::EditorOptions;

use super::PaintState;

/// Main state container for PSF font editing
pub struct PsfEditState {
    /// The active font
    pub(crate) font: PsfFont,

    /// Glyph open in the enlarged editor
    pub(crate) selected_glyph: usize,

    /// Current pointer painting mode
    pub(crate) paint_state: PaintState,

    /// Undo stack length when the current stroke started
    pub(crate) stroke_base: Option<usize>,

    pub(crate) undo_stack: PsfUndoStack,

    /// File path (if loaded from/saved to file)
    pub(crate) file_path: Option<PathBuf>,

    /// Whether the font has been modified since last save
    pub(crate) is_dirty: bool,

    pub(crate) options: EditorOptions,
}

impl Default for PsfEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl PsfEditState {
    /// Create a state holding a blank font of the default size
    pub fn new() -> Self {
        Self::from_options(EditorOptions::default())
    }

    /// Create a state holding a blank font of the size configured in `options`.
    ///
    /// Invalid sizes fall back to an 8x16 font.
    pub fn from_options(options: EditorOptions) -> Self {
        let font = PsfFont::create_blank(options.new_font_height, options.new_font_width).unwrap_or_else(|err| {
            log::warn!("Configured font size unusable, using default: {err}");
            PsfFont::default()
        });
        Self::from_font(font).with_options(options)
    }

    /// Create a state editing an existing font
    pub fn from_font(font: PsfFont) -> Self {
        Self {
            font,
            selected_glyph: 0,
            paint_state: PaintState::Idle,
            stroke_base: None,
            undo_stack: PsfUndoStack::new(),
            file_path: None,
            is_dirty: false,
            options: EditorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: EditorOptions) -> Self {
        self.options = options;
        self
    }

    /// Swap in a new active font. The previous font and its undo history are dropped.
    pub fn replace_font(&mut self, font: PsfFont) {
        log::info!("Replacing active font with {} glyphs ({}x{})", font.glyph_count(), font.width, font.height);
        self.font = font;
        self.selected_glyph = 0;
        self.paint_state = PaintState::Idle;
        self.stroke_base = None;
        self.undo_stack.clear();
        self.file_path = None;
        self.is_dirty = false;
    }

    pub fn font(&self) -> &PsfFont {
        &self.font
    }

    /// Font size as (width, height)
    pub fn font_size(&self) -> (usize, usize) {
        (self.font.width as usize, self.font.height as usize)
    }

    pub fn glyph_count(&self) -> usize {
        self.font.glyph_count()
    }

    pub fn selected_glyph(&self) -> usize {
        self.selected_glyph
    }

    /// Select the glyph shown in the editor, clamped to the glyph count
    pub fn select_glyph(&mut self, glyph: usize) {
        self.selected_glyph = glyph.min(self.glyph_count().saturating_sub(1));
    }

    pub fn paint_state(&self) -> PaintState {
        self.paint_state
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn mark_clean(&mut self) {
        self.is_dirty = false;
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    /// Small preview of a glyph, scaled by `thumbnail_scale`
    pub fn thumbnail(&self, glyph: usize) -> Option<Raster> {
        self.font.render_glyph(glyph, self.options.thumbnail_scale)
    }

    /// Enlarged editing view of a glyph, scaled by `editor_scale`
    pub fn editor_view(&self, glyph: usize) -> Option<Raster> {
        self.font.render_glyph(glyph, self.options.editor_scale)
    }
}
