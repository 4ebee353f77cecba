//! Bitmap font model and PSF2 codec.

mod font;
mod glyph;
pub mod psf2;

pub use font::{PsfFont, BLANK_GLYPH_COUNT, DEFAULT_FONT_SIZE};
pub use glyph::{bitmap_len, bytes_per_row, Glyph, GlyphDisplay, Raster};
pub use psf2::{decode, encode, Psf2Header, PSF2_HEADER_SIZE, PSF2_MAGIC};
