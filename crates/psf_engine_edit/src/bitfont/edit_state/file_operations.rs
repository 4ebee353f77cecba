//! Loading, creating and saving the active font.
//!
//! A failed load never touches the active font.

use std::{
    fs,
    path::{Path, PathBuf},
};

use psf_engine::{EngineError, PsfFont};

use crate::Result;

use super::PsfEditState;

/// Check for a `.psf` file extension (case insensitive).
pub fn is_psf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("psf"))
}

impl PsfEditState {
    /// Decode `bytes` and make the result the active font.
    pub fn open_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        match PsfFont::from_bytes(bytes) {
            Ok(font) => {
                self.replace_font(font);
                Ok(())
            }
            Err(err) => {
                log::warn!("Keeping current font, decode failed: {err}");
                Err(err)
            }
        }
    }

    /// Load a `.psf` file and make it the active font.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        if !is_psf_path(path) {
            log::warn!("Refusing to open {}: not a .psf file", path.display());
            return Err(EngineError::not_psf_file(path));
        }
        let data = fs::read(path)?;
        self.open_bytes(&data)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Replace the active font by a blank one of the given size.
    pub fn new_font(&mut self, height: i32, width: i32) -> Result<()> {
        let font = PsfFont::create_blank(height, width)?;
        self.replace_font(font);
        Ok(())
    }

    /// Replace the active font by a blank one of the configured new font size.
    pub fn new_font_from_options(&mut self) -> Result<()> {
        self.new_font(self.options.new_font_height, self.options.new_font_width)
    }

    /// Encode the active font as it is right now.
    pub fn save_bytes(&mut self) -> Result<Vec<u8>> {
        let data = self.font.to_psf2_bytes()?;
        self.mark_clean();
        Ok(data)
    }

    /// Write the active font to `dir` using the configured output file name.
    pub fn save_to_dir(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.options.output_file_name);
        let data = self.font.to_psf2_bytes()?;
        fs::write(&path, &data)?;
        log::info!("Saved font to {}", path.display());
        self.mark_clean();
        self.file_path = Some(path.clone());
        Ok(path)
    }
}
