use std::{fs, path::Path};

use super::glyph::{bitmap_len, Glyph, Raster};
use crate::{EngineError, Result};

/// Number of glyphs in a freshly created font, one full 8 bit code page.
pub const BLANK_GLYPH_COUNT: usize = 256;

/// Glyph size of [`PsfFont::default`] as (width, height).
pub const DEFAULT_FONT_SIZE: (u32, u32) = (8, 16);

/// An in-memory bitmap font.
///
/// Width and height are stored once and shared by every glyph; the glyph index is the
/// character code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsfFont {
    /// Glyph width in pixels
    pub width: u32,
    /// Glyph height in pixels
    pub height: u32,
    pub glyphs: Vec<Glyph>,
}

impl PsfFont {
    /// Create a font of 256 all-zero glyphs.
    pub fn create_blank(height: i32, width: i32) -> Result<Self> {
        if height <= 0 || width <= 0 {
            return Err(EngineError::invalid_dimensions(width, height));
        }
        let font = Self::blank(width as u32, height as u32);
        log::info!("Created blank font {width}x{height}");
        Ok(font)
    }

    fn blank(width: u32, height: u32) -> Self {
        let glyphs = (0..BLANK_GLYPH_COUNT).map(|_| Glyph::new(width as usize, height as usize)).collect();
        Self { width, height, glyphs }
    }

    /// Build a font from already decoded parts.
    ///
    /// Every glyph must be exactly [`bitmap_len`]`(width, height)` bytes long.
    pub fn from_glyphs(width: u32, height: u32, glyphs: Vec<Glyph>) -> Result<Self> {
        let font = Self { width, height, glyphs };
        font.validate()?;
        Ok(font)
    }

    /// Check that the dimensions are usable and all glyphs share the font's bitmap length.
    ///
    /// A font without glyphs is always valid.
    pub fn validate(&self) -> Result<()> {
        if self.glyphs.is_empty() {
            return Ok(());
        }
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::invalid_dimensions(self.width, self.height));
        }
        let expected = self.bytes_per_glyph();
        match self.glyphs.iter().position(|glyph| glyph.data.len() != expected) {
            Some(glyph) => Err(EngineError::GlyphLength {
                glyph,
                len: self.glyphs[glyph].data.len(),
                expected,
            }),
            None => Ok(()),
        }
    }

    /// Read and decode a PSF2 file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let font = Self::from_bytes(&data)?;
        log::info!("Loaded {} glyphs ({}x{}) from {}", font.glyph_count(), font.width, font.height, path.display());
        Ok(font)
    }

    /// Encode and write the font as a PSF2 file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_psf2_bytes()?;
        fs::write(path, &data)?;
        log::info!("Saved {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Byte length every glyph bitmap of this font has.
    pub fn bytes_per_glyph(&self) -> usize {
        bitmap_len(self.width as usize, self.height as usize)
    }

    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    pub fn glyph_mut(&mut self, index: usize) -> Option<&mut Glyph> {
        self.glyphs.get_mut(index)
    }

    /// Pixel of glyph `index`, `None` if there is no such glyph.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the glyph.
    pub fn get_pixel(&self, index: usize, x: usize, y: usize) -> Option<bool> {
        let width = self.width as usize;
        self.glyph(index).map(|glyph| glyph.get_pixel(width, x, y))
    }

    /// Set one pixel of glyph `index`. Returns `false` if there is no such glyph.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the glyph.
    pub fn set_pixel(&mut self, index: usize, x: usize, y: usize, value: bool) -> bool {
        let width = self.width as usize;
        match self.glyph_mut(index) {
            Some(glyph) => {
                glyph.set_pixel(width, x, y, value);
                true
            }
            None => false,
        }
    }

    /// Magnified view of glyph `index`.
    pub fn render_glyph(&self, index: usize, scale: usize) -> Option<Raster> {
        let width = self.width as usize;
        self.glyph(index).map(|glyph| glyph.render_to_raster(width, scale))
    }
}

impl Default for PsfFont {
    /// Blank 8x16 font
    fn default() -> Self {
        let (width, height) = DEFAULT_FONT_SIZE;
        Self::blank(width, height)
    }
}
