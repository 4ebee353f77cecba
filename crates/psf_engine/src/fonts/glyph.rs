//! Packed bitmap glyph representation.
//!
//! A glyph stores its pixels as packed bytes, one bit per pixel:
//! - Rows are stored top to bottom, each padded to a whole number of bytes
//! - Within a row, bit 7 of the first byte is the leftmost pixel (MSB-first)
//!
//! The glyph does not carry its own dimensions. Width and height live once on the
//! owning [`PsfFont`](super::PsfFont) and every addressing function takes the shared
//! width as a parameter, so glyph and font can never disagree about them.

use std::fmt;

/// Number of bytes used by one row of a glyph `width` pixels wide.
#[inline]
pub const fn bytes_per_row(width: usize) -> usize {
    width.div_ceil(8)
}

/// Number of bytes used by a whole glyph of the given dimensions.
#[inline]
pub const fn bitmap_len(width: usize, height: usize) -> usize {
    bytes_per_row(width) * height
}

/// Byte index and bit mask of pixel `(x, y)` in a glyph `width` pixels wide.
#[inline]
const fn bit_position(width: usize, x: usize, y: usize) -> (usize, u8) {
    let index = y * bytes_per_row(width) + x / 8;
    let mask = 0x80 >> (x % 8);
    (index, mask)
}

/// A single glyph bitmap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Glyph {
    /// Raw bitmap bytes, `bytes_per_row(width) * height` long.
    pub data: Vec<u8>,
}

impl Glyph {
    /// Create an all-zero glyph for the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0; bitmap_len(width, height)],
        }
    }

    /// Take ownership of raw bitmap bytes.
    pub fn from_data(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Number of rows stored in this glyph for the given width.
    #[inline]
    pub fn rows(&self, width: usize) -> usize {
        let stride = bytes_per_row(width);
        if stride == 0 {
            return 0;
        }
        self.data.len() / stride
    }

    /// Get a pixel value at the given position. `true` is ink, `false` background.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y` is past the last row.
    #[inline]
    pub fn get_pixel(&self, width: usize, x: usize, y: usize) -> bool {
        self.check_bounds(width, x, y);
        let (index, mask) = bit_position(width, x, y);
        self.data[index] & mask != 0
    }

    /// Set or clear exactly one pixel. All other bits, including row padding, stay as they are.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y` is past the last row.
    #[inline]
    pub fn set_pixel(&mut self, width: usize, x: usize, y: usize, value: bool) {
        self.check_bounds(width, x, y);
        let (index, mask) = bit_position(width, x, y);
        if value {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    /// Check if the glyph is empty (all bits off, padding included).
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Produce a magnified view: every source pixel becomes a `scale` × `scale` block.
    pub fn render_to_raster(&self, width: usize, scale: usize) -> Raster {
        let height = self.rows(width);
        let raster_width = width * scale;
        let raster_height = height * scale;
        let mut cells = Vec::with_capacity(raster_width * raster_height);
        for ry in 0..raster_height {
            for rx in 0..raster_width {
                cells.push(self.get_pixel(width, rx / scale, ry / scale));
            }
        }
        Raster {
            width: raster_width,
            height: raster_height,
            cells,
        }
    }

    /// Borrow this glyph together with its width for text output.
    pub fn display(&self, width: usize) -> GlyphDisplay<'_> {
        GlyphDisplay { glyph: self, width }
    }

    fn check_bounds(&self, width: usize, x: usize, y: usize) {
        let height = self.rows(width);
        assert!(
            x < width && y < height,
            "pixel ({x}, {y}) outside of {width}x{height} glyph"
        );
    }
}

/// Text dump of a glyph, `#` for ink and `-` for background.
pub struct GlyphDisplay<'a> {
    glyph: &'a Glyph,
    width: usize,
}

impl fmt::Display for GlyphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.glyph.rows(self.width) {
            write!(f, "{y:2}")?;
            for x in 0..self.width {
                let ch = if self.glyph.get_pixel(self.width, x, y) { '#' } else { '-' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "---")
    }
}

/// A boolean pixel grid derived from a glyph, used for drawing previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Raster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value, `false` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x]
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.width.max(1))
    }
}
