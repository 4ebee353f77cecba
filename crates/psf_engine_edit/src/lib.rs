//! Editing model for PSF2 fonts.
//!
//! Everything a font editor front end needs besides drawing: the active font document,
//! pointer driven pixel painting, undo/redo, glyph labels and persisted options.

pub mod bitfont;
pub mod code_page;

mod options;
pub use options::*;

// Re-export all necessary types from psf_engine
pub use psf_engine::{EngineError, Glyph, PsfFont, Raster, Result};
