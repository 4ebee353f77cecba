use psf_engine::{decode, encode, EngineError, Glyph, PsfFont};

fn psf2_header(glyph_count: u32, char_size: u32, height: u32, width: u32) -> Vec<u8> {
    let mut bytes = vec![0x72, 0xB5, 0x4A, 0x86];
    for field in [32, 0, 0, glyph_count, char_size, height, width] {
        bytes.extend_from_slice(&u32::to_le_bytes(field));
    }
    bytes
}

#[test]
fn decode_rejects_any_non_psf2_magic() {
    let candidates: [[u8; 4]; 5] = [
        [0x36, 0x04, 0x00, 0x10], // PSF1
        [0x00, 0x00, 0x00, 0x00],
        [0x86, 0x4A, 0xB5, 0x72], // big endian magic
        [0x72, 0xB5, 0x4A, 0x87],
        [0xFF, 0xFF, 0xFF, 0xFF],
    ];
    for magic in candidates {
        let mut bytes = psf2_header(1, 1, 1, 8);
        bytes[..4].copy_from_slice(&magic);
        bytes.push(0xFF);
        let result = decode(&bytes);
        assert!(matches!(result, Err(EngineError::Format { .. })), "magic {magic:02X?}: {result:?}");
    }
}

#[test]
fn decode_rejects_empty_buffer() {
    assert!(matches!(decode(&[]), Err(EngineError::Format { len: 0, .. })));
}

#[test]
fn decode_truncated_glyph_table() {
    let mut bytes = psf2_header(256, 8, 8, 8);
    bytes.extend_from_slice(&[0u8; 255 * 8]);
    assert!(matches!(
        decode(&bytes),
        Err(EngineError::TruncatedData { expected: 2080, actual: 2072 })
    ));
}

#[test]
fn decode_ignores_trailing_data() {
    let mut bytes = psf2_header(2, 1, 1, 8);
    bytes.extend_from_slice(&[0x18, 0x24]);
    // unicode table of a flagged font
    bytes.extend_from_slice(&[0x41, 0xFF, 0x42, 0xFF]);

    let font = decode(&bytes).unwrap();
    assert_eq!(font.glyph_count(), 2);
    assert_eq!(font.glyphs[1].data, vec![0x24]);
}

#[test]
fn decode_single_ink_pixel() {
    let mut bytes = psf2_header(1, 1, 1, 8);
    bytes.push(0b1000_0000);

    let font = decode(&bytes).unwrap();
    assert_eq!((font.width, font.height), (8, 1));
    assert!(font.glyphs[0].get_pixel(8, 0, 0));
    assert!((1..8).all(|x| !font.glyphs[0].get_pixel(8, x, 0)));
}

#[test]
fn encode_writes_exact_bytes() {
    let mut font = PsfFont::create_blank(2, 5).unwrap();
    font.glyphs.truncate(2);
    font.set_pixel(1, 4, 1, true);

    let mut expected = psf2_header(2, 2, 2, 5);
    expected.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
    assert_eq!(encode(&font).unwrap(), expected);
}

#[test]
fn encode_fails_without_glyphs() {
    let mut font = PsfFont::create_blank(8, 8).unwrap();
    font.glyphs.clear();
    assert!(matches!(encode(&font), Err(EngineError::EmptyFont)));
}

#[test]
fn load_and_save_file() {
    let dir = std::env::temp_dir().join(format!("psf_engine_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("font.psf");

    let mut font = PsfFont::create_blank(14, 8).unwrap();
    font.set_pixel(1, 2, 3, true);
    font.save(&path).unwrap();

    let loaded = PsfFont::load(&path).unwrap();
    assert_eq!(loaded, font);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("psf_engine_does_not_exist.psf");
    assert!(matches!(PsfFont::load(&path), Err(EngineError::Io(_))));
}

#[test]
fn encode_refuses_glyphs_of_other_sizes() {
    let mut tall = Glyph::new(8, 16);
    tall.data[15] = 0xAA;
    let mut font = PsfFont::create_blank(8, 8).unwrap();
    font.glyphs.push(tall);

    let result = encode(&font);
    assert!(
        matches!(result, Err(EngineError::GlyphLength { glyph: 256, len: 16, expected: 8 })),
        "{result:?}"
    );

    font.glyphs.pop();
    font.glyphs[0] = Glyph::from_data(vec![0; 3]);
    assert!(matches!(encode(&font), Err(EngineError::GlyphLength { glyph: 0, len: 3, .. })));
}

#[test]
fn decoded_fonts_satisfy_the_glyph_length_invariant() {
    let mut bytes = psf2_header(3, 4, 2, 12);
    bytes.extend_from_slice(&[0xF0, 0x10, 0x0F, 0x20, 0, 0, 0, 0, 1, 2, 3, 4]);
    let font = decode(&bytes).unwrap();
    font.validate().unwrap();
    assert_eq!(decode(&encode(&font).unwrap()).unwrap(), font);
}
