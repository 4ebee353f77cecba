use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const APP_NAME: &str = "psf_edit";

/// Default name for saved fonts
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "edited_font.psf";

/// User settings of the font editor
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Magnification of the glyph thumbnails
    #[serde(default = "default_thumbnail_scale")]
    pub thumbnail_scale: usize,

    /// Magnification of the glyph editor
    #[serde(default = "default_editor_scale")]
    pub editor_scale: usize,

    /// File name used when saving
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Size offered for new fonts
    #[serde(default = "default_new_font_width")]
    pub new_font_width: i32,
    #[serde(default = "default_new_font_height")]
    pub new_font_height: i32,
}

fn default_thumbnail_scale() -> usize {
    3
}
fn default_editor_scale() -> usize {
    10
}
fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}
fn default_new_font_width() -> i32 {
    8
}
fn default_new_font_height() -> i32 {
    16
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            thumbnail_scale: default_thumbnail_scale(),
            editor_scale: default_editor_scale(),
            output_file_name: default_output_file_name(),
            new_font_width: default_new_font_width(),
            new_font_height: default_new_font_height(),
        }
    }
}

impl EditorOptions {
    pub fn load_options() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", APP_NAME) {
            if !proj_dirs.config_dir().exists() && fs::create_dir_all(proj_dirs.config_dir()).is_err() {
                log::error!("Can't create configuration directory {:?}", proj_dirs.config_dir());
                return Self::default();
            }
            let options_file = proj_dirs.config_dir().join("options.toml");
            if options_file.exists() {
                match fs::read_to_string(options_file) {
                    Ok(txt) => return Self::from_toml(&txt),
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn store_options(&self) {
        if let Some(file_name) = Self::get_config_dir().map(|dir| dir.join("options.toml")) {
            match self.to_toml() {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    /// Parse options, falling back to defaults on malformed input
    pub fn from_toml(txt: &str) -> Self {
        match toml::from_str(txt) {
            Ok(options) => options,
            Err(err) => {
                log::error!("Error parsing options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }
}
