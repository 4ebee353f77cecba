mod file_operations;
mod glyph_operations;
mod internal;
mod paint;
mod state;
mod undo;

pub use file_operations::is_psf_path;
pub use paint::{map_pointer, PaintState, PointerButton};
pub use state::PsfEditState;
