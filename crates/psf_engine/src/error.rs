//! Unified error types for psf_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for psf_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Loading Errors ===
    #[error("Not a PSF2 font: magic {magic:#010x}, header needs 32 bytes, got {len}")]
    Format { magic: u32, len: usize },

    #[error("Glyph table truncated: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("Glyph size mismatch: header says {header} bytes, dimensions need {computed}")]
    GlyphSizeMismatch { header: usize, computed: usize },

    #[error("Glyph {glyph} has {len} bytes, font needs {expected}")]
    GlyphLength { glyph: usize, len: usize, expected: usize },

    #[error("File '{path}' is not a .psf file")]
    NotPsfFile { path: PathBuf },

    // === Saving Errors ===
    #[error("Font has no glyphs")]
    EmptyFont,

    #[error("Font too large for PSF2: {glyph_count} glyphs of {bytes_per_glyph} bytes")]
    FontTooLarge { glyph_count: usize, bytes_per_glyph: usize },

    // === Font Errors ===
    #[error("Invalid glyph dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
}

/// Result type alias for psf_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a format error for a buffer that is not PSF2
    pub fn format(bytes: &[u8]) -> Self {
        let magic = match bytes {
            [a, b, c, d, ..] => u32::from_le_bytes([*a, *b, *c, *d]),
            _ => 0,
        };
        Self::Format { magic, len: bytes.len() }
    }

    /// Create an invalid dimensions error
    pub fn invalid_dimensions(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        Self::InvalidDimensions {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn not_psf_file(path: impl Into<PathBuf>) -> Self {
        Self::NotPsfFile { path: path.into() }
    }
}
