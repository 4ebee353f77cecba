//! PSF2 font codec.
//!
//! Header layout (all fields little-endian u32):
//!
//! | Offset | Field           |
//! |--------|-----------------|
//! | 0      | magic `72 B5 4A 86` |
//! | 4      | header size (glyph table offset) |
//! | 8      | version (ignored) |
//! | 12     | flags (ignored) |
//! | 16     | glyph count     |
//! | 20     | bytes per glyph |
//! | 24     | glyph height    |
//! | 28     | glyph width     |
//!
//! The glyph table follows at the header size offset. Unicode tables are not read.

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use super::{bitmap_len, Glyph, PsfFont};
use crate::{EngineError, Result};

/// PSF2 magic number (on disk: `72 B5 4A 86`)
pub const PSF2_MAGIC: u32 = 0x864A_B572;

/// Size of the fixed PSF2 header
pub const PSF2_HEADER_SIZE: usize = 32;

/// Decoded PSF2 header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Psf2Header {
    pub header_size: u32,
    pub version: u32,
    pub flags: u32,
    pub glyph_count: u32,
    pub bytes_per_glyph: u32,
    pub height: u32,
    pub width: u32,
}

impl Psf2Header {
    /// Read the header, checking length and magic.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PSF2_HEADER_SIZE || LittleEndian::read_u32(&bytes[0..4]) != PSF2_MAGIC {
            return Err(EngineError::format(bytes));
        }
        Ok(Self {
            header_size: LittleEndian::read_u32(&bytes[4..8]),
            version: LittleEndian::read_u32(&bytes[8..12]),
            flags: LittleEndian::read_u32(&bytes[12..16]),
            glyph_count: LittleEndian::read_u32(&bytes[16..20]),
            bytes_per_glyph: LittleEndian::read_u32(&bytes[20..24]),
            height: LittleEndian::read_u32(&bytes[24..28]),
            width: LittleEndian::read_u32(&bytes[28..32]),
        })
    }

    /// Append the 32 byte header to `out`.
    pub fn write(&self, out: &mut Vec<u8>) -> Result<()> {
        out.write_u32::<LittleEndian>(PSF2_MAGIC)?;
        out.write_u32::<LittleEndian>(self.header_size)?;
        out.write_u32::<LittleEndian>(self.version)?;
        out.write_u32::<LittleEndian>(self.flags)?;
        out.write_u32::<LittleEndian>(self.glyph_count)?;
        out.write_u32::<LittleEndian>(self.bytes_per_glyph)?;
        out.write_u32::<LittleEndian>(self.height)?;
        out.write_u32::<LittleEndian>(self.width)?;
        Ok(())
    }

    /// Byte offset one past the end of the glyph table, `None` on overflow.
    fn table_end(&self) -> Option<usize> {
        (self.glyph_count as usize)
            .checked_mul(self.bytes_per_glyph as usize)
            .and_then(|len| len.checked_add(self.header_size as usize))
    }
}

/// Parse a PSF2 byte buffer into a font.
///
/// Nothing is returned unless the whole glyph table could be read.
pub fn decode(bytes: &[u8]) -> Result<PsfFont> {
    let header = Psf2Header::read(bytes)?;
    log::debug!("PSF2 header: {header:?}");

    let Some(end) = header.table_end().filter(|end| *end <= bytes.len()) else {
        return Err(EngineError::TruncatedData {
            expected: header.table_end().unwrap_or(usize::MAX),
            actual: bytes.len(),
        });
    };

    let glyph_count = header.glyph_count as usize;
    let char_size = header.bytes_per_glyph as usize;
    if glyph_count > 0 {
        if header.width == 0 || header.height == 0 {
            return Err(EngineError::invalid_dimensions(header.width, header.height));
        }
        let computed = bitmap_len(header.width as usize, header.height as usize);
        if computed != char_size {
            return Err(EngineError::GlyphSizeMismatch { header: char_size, computed });
        }
    }

    let glyphs = if glyph_count == 0 {
        Vec::new()
    } else {
        bytes[header.header_size as usize..end]
            .chunks_exact(char_size)
            .map(|chunk| Glyph::from_data(chunk.to_vec()))
            .collect()
    };

    PsfFont::from_glyphs(header.width, header.height, glyphs)
}

/// Serialize a font into PSF2 bytes.
///
/// Output is deterministic: header size 32, version and flags zero, glyphs in index order.
/// The font is checked completely before any byte is produced.
pub fn encode(font: &PsfFont) -> Result<Vec<u8>> {
    if font.glyphs.is_empty() {
        return Err(EngineError::EmptyFont);
    }
    font.validate()?;

    let char_size = font.bytes_per_glyph();
    let (glyph_count, bytes_per_glyph) = header_counts(font.glyphs.len(), char_size)?;

    let header = Psf2Header {
        header_size: PSF2_HEADER_SIZE as u32,
        version: 0,
        flags: 0,
        glyph_count,
        bytes_per_glyph,
        height: font.height,
        width: font.width,
    };

    let mut data = Vec::with_capacity(PSF2_HEADER_SIZE + font.glyphs.len() * char_size);
    header.write(&mut data)?;
    for glyph in &font.glyphs {
        data.extend_from_slice(&glyph.data);
    }
    Ok(data)
}

/// Glyph count and bytes per glyph as header fields.
fn header_counts(glyph_count: usize, char_size: usize) -> Result<(u32, u32)> {
    match (u32::try_from(glyph_count), u32::try_from(char_size)) {
        (Ok(count), Ok(size)) => Ok((count, size)),
        _ => Err(EngineError::FontTooLarge {
            glyph_count,
            bytes_per_glyph: char_size,
        }),
    }
}

impl PsfFont {
    /// Parse a PSF2 font from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }

    /// Convert to PSF2 bytes.
    pub fn to_psf2_bytes(&self) -> Result<Vec<u8>> {
        encode(self)
    }
}
