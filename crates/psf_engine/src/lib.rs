#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! Core of the PSF2 font editor: the PSF2 codec, the packed glyph raster model and the
//! font document.

mod error;
pub use error::*;

pub mod fonts;
pub use fonts::*;
