use std::path::Path;

use pretty_assertions::assert_eq;
use psf_engine_edit::{
    bitfont::{PsfEditState, PsfUndoState},
    EditorOptions, EngineError, PsfFont,
};

use super::helpers::{blank_psf2, create_test_state, scratch_dir};

#[test]
fn open_bytes_replaces_font() {
    let mut state = create_test_state();
    state.set_pixel(1, 0, 0, true).unwrap();

    state.open_bytes(&blank_psf2(8, 8)).unwrap();

    assert_eq!(state.font_size(), (8, 8));
    assert_eq!(state.glyph_count(), 256);
    assert!(!state.can_undo());
    assert!(!state.is_dirty());
}

#[test]
fn failed_decode_keeps_previous_font() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut state = create_test_state();
    let before = state.font().clone();

    let mut bad_magic = blank_psf2(8, 8);
    bad_magic[0] = 0;
    assert!(matches!(state.open_bytes(&bad_magic), Err(EngineError::Format { .. })));

    let mut truncated = blank_psf2(8, 8);
    truncated.truncate(100);
    assert!(matches!(state.open_bytes(&truncated), Err(EngineError::TruncatedData { .. })));

    assert_eq!(state.font(), &before);
}

#[test]
fn new_font_uses_requested_size() {
    let mut state = create_test_state();
    state.select_glyph(200);

    state.new_font(10, 12).unwrap();

    assert_eq!(state.font_size(), (12, 10));
    assert_eq!(state.glyph_count(), 256);
    assert_eq!(state.font().glyphs[0].data.len(), 20);
    assert_eq!(state.selected_glyph(), 0);
}

#[test]
fn new_font_rejects_bad_dimensions() {
    let mut state = create_test_state();
    let before = state.font().clone();
    assert!(matches!(state.new_font(0, 8), Err(EngineError::InvalidDimensions { .. })));
    assert!(matches!(state.new_font(8, -1), Err(EngineError::InvalidDimensions { .. })));
    assert_eq!(state.font(), &before);
}

#[test]
fn save_bytes_sees_latest_edit() {
    let mut state = create_test_state();
    state.set_pixel(2, 7, 15, true).unwrap();
    assert!(state.is_dirty());

    let bytes = state.save_bytes().unwrap();
    assert!(!state.is_dirty());

    let font = PsfFont::from_bytes(&bytes).unwrap();
    assert_eq!(font.get_pixel(2, 7, 15), Some(true));
    assert_eq!(&font, state.font());
}

#[test]
fn save_empty_font_fails() {
    let mut state = PsfEditState::from_font(PsfFont::from_glyphs(8, 8, Vec::new()).unwrap());
    assert!(matches!(state.save_bytes(), Err(EngineError::EmptyFont)));
}

#[test]
fn save_to_dir_uses_output_name() {
    let dir = scratch_dir("save");
    let mut state = create_test_state();

    let path = state.save_to_dir(&dir).unwrap();
    assert_eq!(path, dir.join("edited_font.psf"));
    assert_eq!(state.file_path(), Some(path.as_path()));

    let mut reopened = PsfEditState::new();
    reopened.open_file(&path).unwrap();
    assert_eq!(reopened.font(), state.font());
    assert_eq!(reopened.file_path(), Some(path.as_path()));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn save_to_dir_respects_options() {
    let dir = scratch_dir("options");
    let options = EditorOptions {
        output_file_name: "custom.psf".to_string(),
        ..Default::default()
    };
    let mut state = create_test_state().with_options(options);

    let path = state.save_to_dir(&dir).unwrap();
    assert_eq!(path.file_name().unwrap(), "custom.psf");
    assert!(path.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn open_file_requires_psf_extension() {
    let mut state = create_test_state();
    let result = state.open_file(Path::new("font.txt"));
    assert!(matches!(result, Err(EngineError::NotPsfFile { .. })));
}

#[test]
fn open_missing_file() {
    let mut state = create_test_state();
    let result = state.open_file(Path::new("/nonexistent/dir/font.psf"));
    assert!(matches!(result, Err(EngineError::Io(_))));
}

#[test]
fn configured_new_font_size() {
    let options = EditorOptions {
        new_font_width: 12,
        new_font_height: 24,
        ..Default::default()
    };
    let mut state = PsfEditState::from_options(options.clone());
    assert_eq!(state.font_size(), (12, 24));
    assert_eq!(state.font().bytes_per_glyph(), 48);
    assert_eq!(state.options(), &options);

    state.new_font(8, 8).unwrap();
    state.set_options(EditorOptions {
        new_font_width: 5,
        new_font_height: 7,
        ..Default::default()
    });
    state.new_font_from_options().unwrap();
    assert_eq!(state.font_size(), (5, 7));
    assert_eq!(state.glyph_count(), 256);
}

#[test]
fn unusable_new_font_size_falls_back() {
    let options = EditorOptions {
        new_font_width: 0,
        new_font_height: -2,
        ..Default::default()
    };
    let mut state = PsfEditState::from_options(options);
    assert_eq!(state.font_size(), (8, 16));
    assert_eq!(state.font(), &PsfFont::default());

    let result = state.new_font_from_options();
    assert!(matches!(result, Err(EngineError::InvalidDimensions { width: 0, height: -2 })));
    assert_eq!(state.font_size(), (8, 16));
}
